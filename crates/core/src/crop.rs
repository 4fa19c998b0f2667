// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Crop library records and stage duration profiles

use crate::id::CropId;
use crate::stage::Stage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A duration that is negative, NaN, infinite, or not a number at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid duration for {stage}: {value}")]
pub struct InvalidDuration {
    pub stage: Stage,
    pub value: String,
}

/// Check that a duration in days is usable for projection
pub fn check_days(stage: Stage, days: f64) -> Result<f64, InvalidDuration> {
    if days.is_finite() && days >= 0.0 {
        Ok(days)
    } else {
        Err(InvalidDuration {
            stage,
            value: days.to_string(),
        })
    }
}

/// Parse operator input into a duration in days
pub fn parse_days(stage: Stage, raw: &str) -> Result<f64, InvalidDuration> {
    let days: f64 = raw.trim().parse().map_err(|_| InvalidDuration {
        stage,
        value: raw.to_string(),
    })?;
    check_days(stage, days)
}

/// Days used for a profiled stage when the crop leaves it unset
pub fn default_days(stage: Stage) -> Option<f64> {
    match stage {
        Stage::Sowing => Some(0.02),
        Stage::Seedling => Some(3.0),
        Stage::Germination => Some(7.0),
        Stage::Vegetative => Some(21.0),
        Stage::Harvest | Stage::Packaging => None,
    }
}

/// Days written into a freshly added crop
pub fn library_default_days(stage: Stage) -> f64 {
    match stage {
        Stage::Harvest => 2.0,
        Stage::Packaging => 1.0,
        profiled => default_days(profiled).unwrap_or(0.0),
    }
}

/// Per-crop durations for the stages the timeline projects
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StageDurationProfile {
    pub sowing_days: Option<f64>,
    pub seedling_days: Option<f64>,
    pub germination_days: Option<f64>,
    pub vegetative_days: Option<f64>,
}

impl StageDurationProfile {
    /// Configured days for a stage, `None` when unset or not profiled
    pub fn days(&self, stage: Stage) -> Option<f64> {
        match stage {
            Stage::Sowing => self.sowing_days,
            Stage::Seedling => self.seedling_days,
            Stage::Germination => self.germination_days,
            Stage::Vegetative => self.vegetative_days,
            Stage::Harvest | Stage::Packaging => None,
        }
    }

    /// Configured days with the documented default substituted when unset.
    /// A stored zero counts as unset.
    pub fn resolved_days(&self, stage: Stage) -> Option<f64> {
        self.days(stage)
            .filter(|&days| days != 0.0)
            .or_else(|| default_days(stage))
    }

    /// Validate every configured value
    pub fn validate(&self) -> Result<(), InvalidDuration> {
        for stage in Stage::PROFILED {
            if let Some(days) = self.days(stage) {
                check_days(stage, days)?;
            }
        }
        Ok(())
    }
}

/// A duration column of the crop library, one per stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationField(pub Stage);

impl DurationField {
    /// Column name, e.g. `seedling_days`
    pub fn column(&self) -> String {
        format!("{}_days", self.0.name())
    }
}

impl fmt::Display for DurationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_days", self.0.name())
    }
}

impl FromStr for DurationField {
    type Err = crate::stage::UnknownStage;

    /// Accepts either the column name (`seedling_days`) or the bare stage
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.trim().to_lowercase();
        let stage_part = canonical.strip_suffix("_days").unwrap_or(&canonical);
        Stage::parse(stage_part)
            .map(DurationField)
            .map_err(|_| crate::stage::UnknownStage(s.to_string()))
    }
}

/// An entry in the crop library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub id: CropId,
    pub name: String,
    #[serde(default)]
    pub sowing_days: Option<f64>,
    #[serde(default)]
    pub seedling_days: Option<f64>,
    #[serde(default)]
    pub germination_days: Option<f64>,
    #[serde(default)]
    pub vegetative_days: Option<f64>,
    #[serde(default)]
    pub harvest_days: Option<f64>,
    #[serde(default)]
    pub packaging_days: Option<f64>,
}

impl Crop {
    /// Create a crop with every duration set to the library defaults
    pub fn new(id: impl Into<CropId>, name: impl Into<String>) -> Self {
        let mut crop = Self::unconfigured(id, name);
        for stage in Stage::ALL {
            crop.set_days(DurationField(stage), Some(library_default_days(stage)));
        }
        crop
    }

    /// Create a crop with no durations configured
    pub fn unconfigured(id: impl Into<CropId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sowing_days: None,
            seedling_days: None,
            germination_days: None,
            vegetative_days: None,
            harvest_days: None,
            packaging_days: None,
        }
    }

    pub fn days(&self, field: DurationField) -> Option<f64> {
        match field.0 {
            Stage::Sowing => self.sowing_days,
            Stage::Seedling => self.seedling_days,
            Stage::Germination => self.germination_days,
            Stage::Vegetative => self.vegetative_days,
            Stage::Harvest => self.harvest_days,
            Stage::Packaging => self.packaging_days,
        }
    }

    pub fn set_days(&mut self, field: DurationField, days: Option<f64>) {
        let slot = match field.0 {
            Stage::Sowing => &mut self.sowing_days,
            Stage::Seedling => &mut self.seedling_days,
            Stage::Germination => &mut self.germination_days,
            Stage::Vegetative => &mut self.vegetative_days,
            Stage::Harvest => &mut self.harvest_days,
            Stage::Packaging => &mut self.packaging_days,
        };
        *slot = days;
    }

    /// Builder-style duration override
    pub fn with_days(mut self, stage: Stage, days: f64) -> Self {
        self.set_days(DurationField(stage), Some(days));
        self
    }

    /// The profile driving this crop's timeline
    pub fn profile(&self) -> StageDurationProfile {
        StageDurationProfile {
            sowing_days: self.sowing_days,
            seedling_days: self.seedling_days,
            germination_days: self.germination_days,
            vegetative_days: self.vegetative_days,
        }
    }
}

#[cfg(test)]
#[path = "crop_tests.rs"]
mod tests;
