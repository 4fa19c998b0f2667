// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch records
//!
//! A batch is one production run of a crop at a station. Its stage is kept
//! as the raw stored string so that corrupt values surface as
//! [`UnknownStage`] instead of being coerced.

use crate::crop::Crop;
use crate::id::{BatchId, CropId, LocationId};
use crate::stage::{Stage, UnknownStage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One tracked production run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub id: BatchId,
    pub crop_id: CropId,
    pub location_id: LocationId,
    /// Current stage as stored
    pub stage: String,
    /// When sowing began; never changes after creation
    pub started_at: DateTime<Utc>,
    pub quantity: u32,
}

impl Batch {
    /// Create a batch at the first stage
    pub fn new(
        id: impl Into<BatchId>,
        crop_id: impl Into<CropId>,
        location_id: impl Into<LocationId>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            crop_id: crop_id.into(),
            location_id: location_id.into(),
            stage: Stage::FIRST.name().to_string(),
            started_at,
            quantity: 1,
        }
    }

    /// The typed current stage
    pub fn current_stage(&self) -> Result<Stage, UnknownStage> {
        Stage::parse(&self.stage)
    }

    /// Copy of this batch at the given stage
    pub fn with_stage(&self, stage: Stage) -> Self {
        Self {
            stage: stage.name().to_string(),
            ..self.clone()
        }
    }
}

/// A batch joined with the crop that drives its timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchWithCrop {
    pub batch: Batch,
    pub crop: Crop,
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
