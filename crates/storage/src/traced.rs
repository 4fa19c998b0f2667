// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced store wrapper for consistent observability

use crate::store::{FarmStore, StoreError, VersionedBatch};
use kb_core::{Batch, BatchId, BatchWithCrop, Crop, CropId, DurationField, Location, Stage};

/// Wrapper that adds tracing to any FarmStore
#[derive(Clone)]
pub struct TracedStore<S> {
    inner: S,
}

impl<S> TracedStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

fn log_result<T>(result: &Result<T, StoreError>, started: std::time::Instant) {
    let elapsed_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(_) => tracing::debug!(elapsed_ms, "ok"),
        Err(e) => tracing::warn!(elapsed_ms, error = %e, "failed"),
    }
}

impl<S: FarmStore> FarmStore for TracedStore<S> {
    fn list_crops(&self) -> Result<Vec<Crop>, StoreError> {
        let result = self.inner.list_crops();
        if let Ok(crops) = &result {
            tracing::trace!(count = crops.len(), "store.list_crops");
        }
        result
    }

    fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        let result = self.inner.list_locations();
        if let Ok(locations) = &result {
            tracing::trace!(count = locations.len(), "store.list_locations");
        }
        result
    }

    fn list_batches(&self) -> Result<Vec<BatchWithCrop>, StoreError> {
        let result = self.inner.list_batches();
        if let Ok(batches) = &result {
            tracing::trace!(count = batches.len(), "store.list_batches");
        }
        result
    }

    fn get_batch(&self, id: &BatchId) -> Result<VersionedBatch, StoreError> {
        self.inner.get_batch(id)
    }

    fn create_crop(&self, crop: Crop) -> Result<Crop, StoreError> {
        let span = tracing::info_span!("store.create_crop", crop_id = %crop.id, name = %crop.name);
        let _guard = span.enter();

        let started = std::time::Instant::now();
        let result = self.inner.create_crop(crop);
        log_result(&result, started);
        result
    }

    fn update_crop_duration(
        &self,
        id: &CropId,
        field: DurationField,
        days: f64,
    ) -> Result<Crop, StoreError> {
        let span = tracing::info_span!("store.update_crop_duration", crop_id = %id, %field, days);
        let _guard = span.enter();

        let started = std::time::Instant::now();
        let result = self.inner.update_crop_duration(id, field, days);
        log_result(&result, started);
        result
    }

    fn delete_crop(&self, id: &CropId) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.delete_crop", crop_id = %id);
        let _guard = span.enter();

        let started = std::time::Instant::now();
        let result = self.inner.delete_crop(id);
        log_result(&result, started);
        result
    }

    fn create_location(&self, location: Location) -> Result<Location, StoreError> {
        let span = tracing::info_span!("store.create_location", location_id = %location.id);
        let _guard = span.enter();

        let started = std::time::Instant::now();
        let result = self.inner.create_location(location);
        log_result(&result, started);
        result
    }

    fn create_batch(&self, batch: Batch) -> Result<Batch, StoreError> {
        let span = tracing::info_span!(
            "store.create_batch",
            batch_id = %batch.id,
            crop_id = %batch.crop_id,
            location_id = %batch.location_id
        );
        let _guard = span.enter();

        let started = std::time::Instant::now();
        let result = self.inner.create_batch(batch);
        log_result(&result, started);
        result
    }

    fn update_batch_stage(
        &self,
        id: &BatchId,
        expected_version: u64,
        stage: Stage,
    ) -> Result<u64, StoreError> {
        let span = tracing::info_span!(
            "store.update_batch_stage",
            batch_id = %id,
            expected_version,
            %stage
        );
        let _guard = span.enter();

        let started = std::time::Instant::now();
        let result = self.inner.update_batch_stage(id, expected_version, stage);
        log_result(&result, started);
        result
    }

    fn delete_batch(&self, id: &BatchId) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.delete_batch", batch_id = %id);
        let _guard = span.enter();

        let started = std::time::Instant::now();
        let result = self.inner.delete_batch(id);
        log_result(&result, started);
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
