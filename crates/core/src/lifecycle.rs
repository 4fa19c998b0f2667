// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch lifecycle state machine
//!
//! Stages only move forward, one step per call. This module decides the next
//! stage; writing it back is the caller's job.

use crate::batch::Batch;
use crate::stage::{Stage, UnknownStage};
use thiserror::Error;

/// Why a batch could not advance
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvanceError {
    #[error(transparent)]
    UnknownStage(#[from] UnknownStage),
    /// The batch is already at packaging. Not a failure: nothing to do.
    #[error("batch is already at the final stage")]
    AlreadyTerminal,
}

impl AdvanceError {
    /// True for the no-op signal rather than a data problem
    pub fn is_already_terminal(&self) -> bool {
        matches!(self, AdvanceError::AlreadyTerminal)
    }
}

/// Next stage for a raw stored stage value
pub fn next_stage(current: &str) -> Result<Stage, AdvanceError> {
    let stage = Stage::parse(current)?;
    stage.next().ok_or(AdvanceError::AlreadyTerminal)
}

/// Next stage for a batch
pub fn advance(batch: &Batch) -> Result<Stage, AdvanceError> {
    next_stage(&batch.stage)
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
