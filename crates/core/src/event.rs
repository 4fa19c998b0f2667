// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Change notifications
//!
//! One [`Change`] is published for every successful mutation. Subscribers
//! receive the changed record and re-read whatever snapshot they need.

use crate::batch::Batch;
use crate::crop::Crop;
use crate::id::{BatchId, CropId};
use crate::location::Location;
use crate::stage::Stage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    CropCreated { crop: Crop },
    CropUpdated { crop: Crop },
    CropDeleted { id: CropId },
    LocationCreated { location: Location },
    BatchCreated { batch: Batch },
    BatchAdvanced { batch: Batch, from: Stage },
    BatchDeleted { id: BatchId },
}

impl Change {
    /// Routing name, `<table>:<action>`
    pub fn name(&self) -> &'static str {
        match self {
            Change::CropCreated { .. } => "crop:created",
            Change::CropUpdated { .. } => "crop:updated",
            Change::CropDeleted { .. } => "crop:deleted",
            Change::LocationCreated { .. } => "location:created",
            Change::BatchCreated { .. } => "batch:created",
            Change::BatchAdvanced { .. } => "batch:advanced",
            Change::BatchDeleted { .. } => "batch:deleted",
        }
    }

    /// Whether projected timelines must be recomputed
    pub fn invalidates_timeline(&self) -> bool {
        matches!(
            self,
            Change::CropUpdated { .. }
                | Change::BatchCreated { .. }
                | Change::BatchAdvanced { .. }
                | Change::BatchDeleted { .. }
        )
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
