// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Farm runtime
//!
//! Every mutation goes to the store first. Only after the store accepts it
//! is a [`Change`] published, so subscribers never see a write that failed.

use crate::error::FarmError;
use crate::feed::{ChangeFeed, ChangeReceiver};
use crate::subscription::Subscription;
use chrono::{DateTime, Utc};
use kb_core::{
    advance, project_batches, AdvanceError, Batch, BatchId, BatchWithCrop, Change, Clock, Crop,
    CropId, DurationField, IdGen, Location, LocationId, PipelineView, Stage, StationMap,
    TimelineReport,
};
use kb_storage::FarmStore;
use serde::{Deserialize, Serialize};

/// Result of asking a batch to move to its next stage
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    Advanced {
        batch: Batch,
        from: Stage,
        to: Stage,
        version: u64,
    },
    /// The batch is at packaging; nothing was written
    AlreadyTerminal { batch: Batch },
}

impl AdvanceOutcome {
    pub fn batch(&self) -> &Batch {
        match self {
            AdvanceOutcome::Advanced { batch, .. } | AdvanceOutcome::AlreadyTerminal { batch } => {
                batch
            }
        }
    }
}

/// Full read of every table, taken at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub crops: Vec<Crop>,
    pub locations: Vec<Location>,
    pub batches: Vec<BatchWithCrop>,
}

/// Derived views recomputed from a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub timeline: TimelineReport,
    pub pipeline: PipelineView,
    pub stations: StationMap,
}

impl Dashboard {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            timeline: project_batches(&snapshot.batches),
            pipeline: PipelineView::build(&snapshot.batches),
            stations: StationMap::build(&snapshot.locations, &snapshot.batches),
        }
    }
}

/// Farm runtime over a store, a clock, and an id generator
pub struct Farm<S, C, I> {
    store: S,
    clock: C,
    id_gen: I,
    feed: ChangeFeed,
}

impl<S, C, I> Farm<S, C, I>
where
    S: FarmStore,
    C: Clock,
    I: IdGen,
{
    pub fn new(store: S, clock: C, id_gen: I) -> Self {
        Self {
            store,
            clock,
            id_gen,
            feed: ChangeFeed::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Receive changes matching the subscription
    pub fn subscribe(&self, subscription: Subscription) -> ChangeReceiver {
        self.feed.subscribe(subscription)
    }

    pub fn feed(&self) -> &ChangeFeed {
        &self.feed
    }

    fn publish(&self, change: Change) {
        tracing::debug!(change = change.name(), "publishing change");
        self.feed.publish(&change);
    }

    // Crops

    /// Add a crop with library defaults, then apply `overrides`
    pub fn add_crop(
        &self,
        name: &str,
        overrides: &[(DurationField, f64)],
    ) -> Result<Crop, FarmError> {
        let mut crop = Crop::new(self.id_gen.next(), name.trim());
        for &(field, days) in overrides {
            crop.set_days(field, Some(days));
        }

        let crop = self.store.create_crop(crop)?;
        tracing::info!(crop_id = %crop.id, name = %crop.name, "crop added");
        self.publish(Change::CropCreated { crop: crop.clone() });
        Ok(crop)
    }

    pub fn set_crop_duration(
        &self,
        id: &CropId,
        field: DurationField,
        days: f64,
    ) -> Result<Crop, FarmError> {
        let crop = self.store.update_crop_duration(id, field, days)?;
        tracing::info!(crop_id = %id, field = %field, days, "crop duration set");
        self.publish(Change::CropUpdated { crop: crop.clone() });
        Ok(crop)
    }

    pub fn remove_crop(&self, id: &CropId) -> Result<(), FarmError> {
        self.store.delete_crop(id)?;
        tracing::info!(crop_id = %id, "crop removed");
        self.publish(Change::CropDeleted { id: id.clone() });
        Ok(())
    }

    pub fn crops(&self) -> Result<Vec<Crop>, FarmError> {
        Ok(self.store.list_crops()?)
    }

    // Locations

    pub fn add_location(&self, name: &str) -> Result<Location, FarmError> {
        let location = Location::new(self.id_gen.next(), name.trim());
        let location = self.store.create_location(location)?;
        tracing::info!(location_id = %location.id, name = %location.name, "location added");
        self.publish(Change::LocationCreated {
            location: location.clone(),
        });
        Ok(location)
    }

    pub fn locations(&self) -> Result<Vec<Location>, FarmError> {
        Ok(self.store.list_locations()?)
    }

    // Batches

    /// Start a batch at sowing. Without an explicit time it starts now.
    pub fn start_batch(
        &self,
        crop_id: &CropId,
        location_id: &LocationId,
        started_at: Option<DateTime<Utc>>,
    ) -> Result<Batch, FarmError> {
        let started_at = started_at.unwrap_or_else(|| self.clock.now());
        let batch = Batch::new(
            self.id_gen.next(),
            crop_id.clone(),
            location_id.clone(),
            started_at,
        );

        let batch = self.store.create_batch(batch)?;
        tracing::info!(
            batch_id = %batch.id,
            crop_id = %batch.crop_id,
            location_id = %batch.location_id,
            started_at = %batch.started_at,
            "batch started"
        );
        self.publish(Change::BatchCreated {
            batch: batch.clone(),
        });
        Ok(batch)
    }

    /// Move a batch forward one stage.
    ///
    /// A batch at packaging yields [`AdvanceOutcome::AlreadyTerminal`] and is
    /// left untouched. A stored stage that matches nothing is an error and the
    /// batch is likewise untouched. A concurrent advance of the same batch
    /// fails with a store conflict.
    pub fn advance_batch(&self, id: &BatchId) -> Result<AdvanceOutcome, FarmError> {
        let current = self.store.get_batch(id)?;
        let batch = current.batch;

        let to = match advance(&batch) {
            Ok(to) => to,
            Err(AdvanceError::AlreadyTerminal) => {
                tracing::warn!(batch_id = %id, stage = %batch.stage, "batch already at final stage");
                return Ok(AdvanceOutcome::AlreadyTerminal { batch });
            }
            Err(AdvanceError::UnknownStage(source)) => {
                return Err(FarmError::UnknownStage {
                    id: id.clone(),
                    source,
                });
            }
        };
        let from = batch
            .current_stage()
            .map_err(|source| FarmError::UnknownStage {
                id: id.clone(),
                source,
            })?;

        let version = self.store.update_batch_stage(id, current.version, to)?;
        let batch = batch.with_stage(to);
        tracing::info!(batch_id = %id, from = %from, to = %to, version, "batch advanced");
        self.publish(Change::BatchAdvanced {
            batch: batch.clone(),
            from,
        });

        Ok(AdvanceOutcome::Advanced {
            batch,
            from,
            to,
            version,
        })
    }

    pub fn remove_batch(&self, id: &BatchId) -> Result<(), FarmError> {
        self.store.delete_batch(id)?;
        tracing::info!(batch_id = %id, "batch removed");
        self.publish(Change::BatchDeleted { id: id.clone() });
        Ok(())
    }

    pub fn batches(&self) -> Result<Vec<BatchWithCrop>, FarmError> {
        Ok(self.store.list_batches()?)
    }

    // Views

    pub fn snapshot(&self) -> Result<Snapshot, FarmError> {
        Ok(Snapshot {
            crops: self.store.list_crops()?,
            locations: self.store.list_locations()?,
            batches: self.store.list_batches()?,
        })
    }

    /// Recompute timeline, pipeline and station views from a fresh snapshot
    pub fn dashboard(&self) -> Result<Dashboard, FarmError> {
        Ok(Dashboard::from_snapshot(&self.snapshot()?))
    }
}

#[cfg(test)]
#[path = "farm_tests.rs"]
mod tests;
