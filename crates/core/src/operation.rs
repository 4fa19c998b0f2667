// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operations for the write-ahead log

use crate::batch::Batch;
use crate::crop::{Crop, DurationField};
use crate::id::{BatchId, CropId};
use crate::location::Location;
use crate::stage::Stage;
use serde::{Deserialize, Serialize};

/// Operations that can be persisted to the WAL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Add a crop to the library
    CropCreate { crop: Crop },

    /// Change one duration column of a crop
    CropDurationSet {
        id: CropId,
        field: DurationField,
        days: f64,
    },

    /// Remove a crop from the library
    CropDelete { id: CropId },

    /// Register a station
    LocationCreate { location: Location },

    /// Start a new batch
    BatchCreate { batch: Batch },

    /// Record a batch's new stage
    BatchStageSet {
        id: BatchId,
        stage: Stage,
        /// Record version after this write
        version: u64,
    },

    /// Remove a batch
    BatchDelete { id: BatchId },
}

#[cfg(test)]
#[path = "operation_tests.rs"]
mod tests;
