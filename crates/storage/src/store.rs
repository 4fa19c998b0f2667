// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Farm persistence
//!
//! [`FarmStore`] is the collaborator the engine reads snapshots from and
//! writes mutations through. [`WalStore`] implements it on top of the WAL
//! and materialized state, serializing writes behind one lock.

use crate::state::{MaterializedState, Row};
use crate::wal::{Wal, WalError};
use kb_core::crop::check_days;
use kb_core::{
    Batch, BatchId, BatchWithCrop, Crop, CropId, DurationField, InvalidDuration, Location,
    LocationId, Operation, Stage,
};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

/// Errors reported by the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("WAL error: {0}")]
    Wal(#[from] WalError),
    #[error("crop not found: {0}")]
    CropNotFound(CropId),
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),
    #[error("batch not found: {0}")]
    BatchNotFound(BatchId),
    #[error("id already in use: {0}")]
    DuplicateId(String),
    #[error("name must not be empty")]
    EmptyName,
    #[error(transparent)]
    InvalidDuration(#[from] InvalidDuration),
    #[error("crop {id} is used by {batches} batch(es)")]
    CropInUse { id: CropId, batches: usize },
    #[error("batch {id} changed concurrently (expected version {expected}, found {actual})")]
    Conflict {
        id: BatchId,
        expected: u64,
        actual: u64,
    },
}

/// A batch with the version its next stage write must match
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedBatch {
    pub batch: Batch,
    pub version: u64,
}

/// Per-table CRUD over crops, locations and batches
pub trait FarmStore: Send + Sync {
    /// Crops ordered by name
    fn list_crops(&self) -> Result<Vec<Crop>, StoreError>;

    /// Locations in creation order
    fn list_locations(&self) -> Result<Vec<Location>, StoreError>;

    /// Batches in creation order, each joined with its crop
    fn list_batches(&self) -> Result<Vec<BatchWithCrop>, StoreError>;

    fn get_batch(&self, id: &BatchId) -> Result<VersionedBatch, StoreError>;

    fn create_crop(&self, crop: Crop) -> Result<Crop, StoreError>;

    /// Set one duration column; returns the updated crop
    fn update_crop_duration(
        &self,
        id: &CropId,
        field: DurationField,
        days: f64,
    ) -> Result<Crop, StoreError>;

    /// Remove a crop that no batch references
    fn delete_crop(&self, id: &CropId) -> Result<(), StoreError>;

    fn create_location(&self, location: Location) -> Result<Location, StoreError>;

    fn create_batch(&self, batch: Batch) -> Result<Batch, StoreError>;

    /// Write a new stage if the batch is still at `expected_version`.
    /// Returns the new version.
    fn update_batch_stage(
        &self,
        id: &BatchId,
        expected_version: u64,
        stage: Stage,
    ) -> Result<u64, StoreError>;

    fn delete_batch(&self, id: &BatchId) -> Result<(), StoreError>;
}

struct Inner {
    /// `None` for a store that is not backed by a file
    wal: Option<Wal>,
    state: MaterializedState,
}

impl Inner {
    fn commit(&mut self, op: Operation) -> Result<(), StoreError> {
        if let Some(wal) = self.wal.as_mut() {
            wal.append(&op)?;
        }
        self.state.apply(&op);
        Ok(())
    }
}

/// WAL-backed store
pub struct WalStore {
    inner: Mutex<Inner>,
}

impl WalStore {
    /// Open the store at `path`, replaying any existing log
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let entries = Wal::replay(path)?;
        let last_seq = entries.last().map_or(0, |e| e.seq);
        let state = MaterializedState::replay(entries.iter().map(|e| &e.op));
        let wal = Wal::open(path, last_seq)?;

        tracing::debug!(
            path = %path.display(),
            entries = entries.len(),
            "replayed WAL"
        );

        Ok(Self {
            inner: Mutex::new(Inner {
                wal: Some(wal),
                state,
            }),
        })
    }

    /// Store that keeps state in memory only
    pub fn in_memory() -> Self {
        Self {
            inner: Mutex::new(Inner {
                wal: None,
                state: MaterializedState::default(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn require_name(name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        Err(StoreError::EmptyName)
    } else {
        Ok(())
    }
}

impl FarmStore for WalStore {
    fn list_crops(&self) -> Result<Vec<Crop>, StoreError> {
        let inner = self.lock();
        Ok(inner
            .state
            .crops_by_name()
            .into_iter()
            .map(|r| r.value.clone())
            .collect())
    }

    fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        let inner = self.lock();
        Ok(inner
            .state
            .locations_in_order()
            .into_iter()
            .map(|r| r.value.clone())
            .collect())
    }

    fn list_batches(&self) -> Result<Vec<BatchWithCrop>, StoreError> {
        let inner = self.lock();
        let state = &inner.state;
        let mut joined = Vec::with_capacity(state.batches.len());

        for Row { value: batch, .. } in state.batches_in_order() {
            match state.crops.get(&batch.crop_id) {
                Some(crop) => joined.push(BatchWithCrop {
                    batch: batch.clone(),
                    crop: crop.value.clone(),
                }),
                None => {
                    tracing::warn!(batch_id = %batch.id, crop_id = %batch.crop_id, "batch references missing crop");
                }
            }
        }

        Ok(joined)
    }

    fn get_batch(&self, id: &BatchId) -> Result<VersionedBatch, StoreError> {
        let inner = self.lock();
        inner
            .state
            .batches
            .get(id)
            .map(|row| VersionedBatch {
                batch: row.value.clone(),
                version: row.version,
            })
            .ok_or_else(|| StoreError::BatchNotFound(id.clone()))
    }

    fn create_crop(&self, crop: Crop) -> Result<Crop, StoreError> {
        require_name(&crop.name)?;
        for stage in Stage::ALL {
            if let Some(days) = crop.days(DurationField(stage)) {
                check_days(stage, days)?;
            }
        }

        let mut inner = self.lock();
        if inner.state.crops.contains_key(&crop.id) {
            return Err(StoreError::DuplicateId(crop.id.to_string()));
        }
        inner.commit(Operation::CropCreate { crop: crop.clone() })?;
        Ok(crop)
    }

    fn update_crop_duration(
        &self,
        id: &CropId,
        field: DurationField,
        days: f64,
    ) -> Result<Crop, StoreError> {
        let days = check_days(field.0, days)?;

        let mut inner = self.lock();
        if !inner.state.crops.contains_key(id) {
            return Err(StoreError::CropNotFound(id.clone()));
        }
        inner.commit(Operation::CropDurationSet {
            id: id.clone(),
            field,
            days,
        })?;

        inner
            .state
            .crops
            .get(id)
            .map(|row| row.value.clone())
            .ok_or_else(|| StoreError::CropNotFound(id.clone()))
    }

    fn delete_crop(&self, id: &CropId) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if !inner.state.crops.contains_key(id) {
            return Err(StoreError::CropNotFound(id.clone()));
        }
        let batches = inner.state.batches_using(id);
        if batches > 0 {
            return Err(StoreError::CropInUse {
                id: id.clone(),
                batches,
            });
        }
        inner.commit(Operation::CropDelete { id: id.clone() })
    }

    fn create_location(&self, location: Location) -> Result<Location, StoreError> {
        require_name(&location.name)?;

        let mut inner = self.lock();
        if inner.state.locations.contains_key(&location.id) {
            return Err(StoreError::DuplicateId(location.id.to_string()));
        }
        inner.commit(Operation::LocationCreate {
            location: location.clone(),
        })?;
        Ok(location)
    }

    fn create_batch(&self, batch: Batch) -> Result<Batch, StoreError> {
        let mut inner = self.lock();
        if !inner.state.crops.contains_key(&batch.crop_id) {
            return Err(StoreError::CropNotFound(batch.crop_id.clone()));
        }
        if !inner.state.locations.contains_key(&batch.location_id) {
            return Err(StoreError::LocationNotFound(batch.location_id.clone()));
        }
        if inner.state.batches.contains_key(&batch.id) {
            return Err(StoreError::DuplicateId(batch.id.to_string()));
        }
        inner.commit(Operation::BatchCreate {
            batch: batch.clone(),
        })?;
        Ok(batch)
    }

    fn update_batch_stage(
        &self,
        id: &BatchId,
        expected_version: u64,
        stage: Stage,
    ) -> Result<u64, StoreError> {
        let mut inner = self.lock();
        let actual = inner
            .state
            .batches
            .get(id)
            .map(|row| row.version)
            .ok_or_else(|| StoreError::BatchNotFound(id.clone()))?;
        if actual != expected_version {
            return Err(StoreError::Conflict {
                id: id.clone(),
                expected: expected_version,
                actual,
            });
        }

        let version = actual + 1;
        inner.commit(Operation::BatchStageSet {
            id: id.clone(),
            stage,
            version,
        })?;
        Ok(version)
    }

    fn delete_batch(&self, id: &BatchId) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if !inner.state.batches.contains_key(id) {
            return Err(StoreError::BatchNotFound(id.clone()));
        }
        inner.commit(Operation::BatchDelete { id: id.clone() })
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
