// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Staging pipeline view
//!
//! Read-only grouping of batches into one column per stage, rebuilt from a
//! fresh snapshot after every change.

use crate::batch::BatchWithCrop;
use crate::stage::Stage;
use serde::{Deserialize, Serialize};

/// One staging column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageColumn {
    pub stage: Stage,
    pub color: String,
    pub batches: Vec<BatchWithCrop>,
}

/// Batches grouped by current stage, in stage order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineView {
    pub columns: Vec<StageColumn>,
    /// Batches whose stored stage matches no column
    pub unrecognized: Vec<BatchWithCrop>,
}

impl PipelineView {
    pub fn build(batches: &[BatchWithCrop]) -> Self {
        let mut columns: Vec<StageColumn> = Stage::ALL
            .iter()
            .map(|&stage| StageColumn {
                stage,
                color: stage.color().to_string(),
                batches: Vec::new(),
            })
            .collect();
        let mut unrecognized = Vec::new();

        for entry in batches {
            match entry.batch.current_stage() {
                Ok(stage) => columns[stage.index()].batches.push(entry.clone()),
                Err(e) => {
                    tracing::warn!(batch_id = %entry.batch.id, error = %e, "batch has no stage column");
                    unrecognized.push(entry.clone());
                }
            }
        }

        Self {
            columns,
            unrecognized,
        }
    }

    pub fn column(&self, stage: Stage) -> Option<&StageColumn> {
        self.columns.iter().find(|c| c.stage == stage)
    }

    /// Number of batches placed in a column
    pub fn active_count(&self) -> usize {
        self.columns.iter().map(|c| c.batches.len()).sum()
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
