// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timeline projection
//!
//! Turns a batch's start time and its crop's duration profile into one dated
//! interval per profiled stage. Intervals are chained: each stage starts
//! exactly where the previous one ended. Projection is pure; the only time
//! input is the `started_at` passed in.

use crate::batch::BatchWithCrop;
use crate::crop::{check_days, InvalidDuration, StageDurationProfile};
use crate::id::{BatchId, CropId};
use crate::stage::Stage;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Durations shorter than this many days advance by minutes, not days
pub const SUB_DAY_THRESHOLD_DAYS: f64 = 0.1;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Errors from projecting a single crop profile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error(transparent)]
    InvalidDuration(#[from] InvalidDuration),
    #[error("{stage} would end outside the supported date range")]
    OutOfRange { stage: Stage },
}

/// One projected stage interval, derived and never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub label: String,
    pub stage: Stage,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl TimelineEvent {
    pub fn color(&self) -> &'static str {
        self.stage.color()
    }
}

/// Calendar label, e.g. `[SEEDLING] Spinach`
pub fn event_label(stage: Stage, crop_name: &str) -> String {
    format!("[{}] {}", stage.name().to_uppercase(), crop_name)
}

/// Length of a stage lasting `days`.
///
/// Sub-day durations keep their fraction at millisecond precision. Longer
/// durations count whole days only; any fraction is dropped.
pub fn stage_span(days: f64) -> Option<TimeDelta> {
    if days < SUB_DAY_THRESHOLD_DAYS {
        TimeDelta::try_milliseconds((days * MILLIS_PER_DAY).round() as i64)
    } else {
        TimeDelta::try_days(days.trunc() as i64)
    }
}

/// Project the four profiled stages starting at `started_at`
pub fn project(
    started_at: DateTime<Utc>,
    crop_name: &str,
    profile: &StageDurationProfile,
) -> Result<Vec<TimelineEvent>, TimelineError> {
    let mut cursor = started_at;
    let mut events = Vec::with_capacity(Stage::PROFILED.len());

    for stage in Stage::PROFILED {
        let days = match profile.resolved_days(stage) {
            Some(days) => check_days(stage, days)?,
            None => continue,
        };
        let ends_at = stage_span(days)
            .and_then(|span| cursor.checked_add_signed(span))
            .ok_or(TimelineError::OutOfRange { stage })?;

        events.push(TimelineEvent {
            label: event_label(stage, crop_name),
            stage,
            starts_at: cursor,
            ends_at,
        });
        cursor = ends_at;
    }

    Ok(events)
}

/// Projected timeline for one batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTimeline {
    pub batch_id: BatchId,
    pub crop_name: String,
    pub events: Vec<TimelineEvent>,
}

/// A batch left off the timeline because its crop profile is unusable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedBatch {
    pub batch_id: BatchId,
    pub crop_id: CropId,
    pub reason: String,
}

/// Timeline for a whole batch collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineReport {
    pub timelines: Vec<BatchTimeline>,
    pub skipped: Vec<SkippedBatch>,
}

impl TimelineReport {
    /// Every event across all batches, batch by batch
    pub fn events(&self) -> impl Iterator<Item = &TimelineEvent> {
        self.timelines.iter().flat_map(|t| t.events.iter())
    }
}

/// Project every batch, isolating failures to the batch whose crop is bad
pub fn project_batches(batches: &[BatchWithCrop]) -> TimelineReport {
    let mut report = TimelineReport::default();

    for BatchWithCrop { batch, crop } in batches {
        match project(batch.started_at, &crop.name, &crop.profile()) {
            Ok(events) => report.timelines.push(BatchTimeline {
                batch_id: batch.id.clone(),
                crop_name: crop.name.clone(),
                events,
            }),
            Err(e) => {
                tracing::warn!(
                    batch_id = %batch.id,
                    crop_id = %crop.id,
                    error = %e,
                    "skipping batch timeline"
                );
                report.skipped.push(SkippedBatch {
                    batch_id: batch.id.clone(),
                    crop_id: crop.id.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
