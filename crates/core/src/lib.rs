// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kb-core: Core library for the Kebun farm tracker
//!
//! This crate provides:
//! - The batch lifecycle state machine
//! - Timeline projection from crop duration profiles
//! - Derived staging and station views
//! - WAL operations and change notifications

pub mod clock;
pub mod id;

// Records (order matters for dependencies)
pub mod stage;
pub mod crop;
pub mod location;
pub mod batch;

pub mod lifecycle;
pub mod timeline;
pub mod pipeline;
pub mod station;

pub mod event;
pub mod operation;

pub use batch::{Batch, BatchWithCrop};
pub use clock::{Clock, FakeClock, SystemClock};
pub use crop::{Crop, DurationField, InvalidDuration, StageDurationProfile};
pub use event::Change;
pub use id::{BatchId, CropId, IdGen, LocationId, SequentialIdGen, UuidIdGen};
pub use lifecycle::{advance, AdvanceError};
pub use location::Location;
pub use operation::Operation;
pub use pipeline::{PipelineView, StageColumn};
pub use stage::{color_for, Stage, UnknownStage, FALLBACK_COLOR};
pub use station::{StationMap, StationTile};
pub use timeline::{project, project_batches, TimelineError, TimelineEvent, TimelineReport};
