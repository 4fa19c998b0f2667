// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Growth stages
//!
//! The stage set is closed and ordered. Stored values are raw strings; they
//! become a [`Stage`] only through [`Stage::parse`], which trims and
//! lower-cases before matching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color shown for a stage that does not match the fixed sequence
pub const FALLBACK_COLOR: &str = "#ddd";

/// A stored stage value that matches no entry of the stage sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown stage: {0:?}")]
pub struct UnknownStage(pub String);

/// One phase in the fixed growth sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Sowing,
    Seedling,
    Germination,
    Vegetative,
    Harvest,
    Packaging,
}

impl Stage {
    /// Every stage, in the only legal order of progression
    pub const ALL: [Stage; 6] = [
        Stage::Sowing,
        Stage::Seedling,
        Stage::Germination,
        Stage::Vegetative,
        Stage::Harvest,
        Stage::Packaging,
    ];

    /// Stages covered by a crop's duration profile and the timeline
    pub const PROFILED: [Stage; 4] = [
        Stage::Sowing,
        Stage::Seedling,
        Stage::Germination,
        Stage::Vegetative,
    ];

    pub const FIRST: Stage = Stage::Sowing;
    pub const TERMINAL: Stage = Stage::Packaging;

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Sowing => "sowing",
            Stage::Seedling => "seedling",
            Stage::Germination => "germination",
            Stage::Vegetative => "vegetative",
            Stage::Harvest => "harvest",
            Stage::Packaging => "packaging",
        }
    }

    /// Position in [`Stage::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The stage after this one, or `None` at packaging
    pub fn next(&self) -> Option<Stage> {
        Stage::ALL.get(self.index() + 1).copied()
    }

    pub fn is_terminal(&self) -> bool {
        *self == Stage::TERMINAL
    }

    /// Display color used by the calendar, staging columns and station map
    pub fn color(&self) -> &'static str {
        match self {
            Stage::Sowing => "#8e44ad",
            Stage::Seedling => "#3498db",
            Stage::Germination => "#f1c40f",
            Stage::Vegetative => "#27ae60",
            Stage::Harvest => "#e67e22",
            Stage::Packaging => "#2c3e50",
        }
    }

    /// Canonicalize a stored stage string and match it against the sequence
    pub fn parse(raw: &str) -> Result<Stage, UnknownStage> {
        let canonical = raw.trim().to_lowercase();
        Stage::ALL
            .into_iter()
            .find(|s| s.name() == canonical)
            .ok_or_else(|| UnknownStage(raw.to_string()))
    }
}

/// Color for a raw stored stage value, falling back for unknown stages
pub fn color_for(raw: &str) -> &'static str {
    Stage::parse(raw)
        .map(|s| s.color())
        .unwrap_or(FALLBACK_COLOR)
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::parse(s)
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
