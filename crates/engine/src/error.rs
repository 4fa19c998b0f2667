// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the farm runtime

use kb_core::{BatchId, UnknownStage};
use kb_storage::StoreError;
use thiserror::Error;

/// Errors that can occur in the runtime
#[derive(Debug, Error)]
pub enum FarmError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("batch {id} has an unrecognized stage")]
    UnknownStage {
        id: BatchId,
        #[source]
        source: UnknownStage,
    },
}

impl FarmError {
    /// True when a stage write lost an optimistic version race
    pub fn is_conflict(&self) -> bool {
        matches!(self, FarmError::Store(StoreError::Conflict { .. }))
    }
}
