// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Materialized state from WAL replay

use kb_core::{Batch, BatchId, Crop, CropId, Location, LocationId, Operation};
use std::collections::HashMap;

/// A stored record with its creation order and write version
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    /// Creation order, used for stable listings
    pub seq: u64,
    /// Incremented on every stage write
    pub version: u64,
    pub value: T,
}

/// Materialized state built from WAL operations
#[derive(Debug, Default)]
pub struct MaterializedState {
    pub crops: HashMap<CropId, Row<Crop>>,
    pub locations: HashMap<LocationId, Row<Location>>,
    pub batches: HashMap<BatchId, Row<Batch>>,
    next_seq: u64,
}

impl MaterializedState {
    /// Build state by applying operations in order
    pub fn replay<'a>(ops: impl IntoIterator<Item = &'a Operation>) -> Self {
        let mut state = Self::default();
        for op in ops {
            state.apply(op);
        }
        state
    }

    fn row<T>(&mut self, value: T) -> Row<T> {
        self.next_seq += 1;
        Row {
            seq: self.next_seq,
            version: 0,
            value,
        }
    }

    /// Crops ordered by name, ties broken by creation order
    pub fn crops_by_name(&self) -> Vec<&Row<Crop>> {
        let mut rows: Vec<_> = self.crops.values().collect();
        rows.sort_by(|a, b| a.value.name.cmp(&b.value.name).then(a.seq.cmp(&b.seq)));
        rows
    }

    pub fn locations_in_order(&self) -> Vec<&Row<Location>> {
        let mut rows: Vec<_> = self.locations.values().collect();
        rows.sort_by_key(|r| r.seq);
        rows
    }

    pub fn batches_in_order(&self) -> Vec<&Row<Batch>> {
        let mut rows: Vec<_> = self.batches.values().collect();
        rows.sort_by_key(|r| r.seq);
        rows
    }

    /// Number of batches referencing a crop
    pub fn batches_using(&self, crop_id: &CropId) -> usize {
        self.batches
            .values()
            .filter(|r| &r.value.crop_id == crop_id)
            .count()
    }

    /// Apply an operation to update the state
    pub fn apply(&mut self, op: &Operation) {
        match op {
            Operation::CropCreate { crop } => {
                let row = self.row(crop.clone());
                self.crops.insert(crop.id.clone(), row);
            }

            Operation::CropDurationSet { id, field, days } => {
                if let Some(row) = self.crops.get_mut(id) {
                    row.value.set_days(*field, Some(*days));
                    row.version += 1;
                }
            }

            Operation::CropDelete { id } => {
                self.crops.remove(id);
            }

            Operation::LocationCreate { location } => {
                let row = self.row(location.clone());
                self.locations.insert(location.id.clone(), row);
            }

            Operation::BatchCreate { batch } => {
                let row = self.row(batch.clone());
                self.batches.insert(batch.id.clone(), row);
            }

            Operation::BatchStageSet { id, stage, version } => {
                if let Some(row) = self.batches.get_mut(id) {
                    row.value.stage = stage.name().to_string();
                    row.version = *version;
                }
            }

            Operation::BatchDelete { id } => {
                self.batches.remove(id);
            }
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
