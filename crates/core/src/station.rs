// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Farm map: which batch occupies each station
//!
//! A derived read only. When several batches share a station the first one
//! in listing order is shown.

use crate::batch::BatchWithCrop;
use crate::location::Location;
use crate::stage::{color_for, FALLBACK_COLOR};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationTile {
    pub location: Location,
    pub occupant: Option<BatchWithCrop>,
    pub color: String,
}

impl StationTile {
    /// Crop name of the occupant, or `Empty`
    pub fn caption(&self) -> &str {
        self.occupant
            .as_ref()
            .map_or("Empty", |o| o.crop.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMap {
    pub tiles: Vec<StationTile>,
}

impl StationMap {
    pub fn build(locations: &[Location], batches: &[BatchWithCrop]) -> Self {
        let tiles = locations
            .iter()
            .map(|location| {
                let occupant = batches
                    .iter()
                    .find(|b| b.batch.location_id == location.id)
                    .cloned();
                let color = occupant
                    .as_ref()
                    .map_or(FALLBACK_COLOR, |o| color_for(&o.batch.stage))
                    .to_string();
                StationTile {
                    location: location.clone(),
                    occupant,
                    color,
                }
            })
            .collect();
        Self { tiles }
    }
}

#[cfg(test)]
#[path = "station_tests.rs"]
mod tests;
