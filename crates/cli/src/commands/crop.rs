// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Crop library commands

use super::lookup::resolve;
use super::Context;
use crate::output::{self, days};
use clap::{Args, Subcommand};
use kb_core::crop::parse_days;
use kb_core::{Crop, DurationField, Stage};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct CropArgs {
    #[command(subcommand)]
    pub command: CropCommand,
}

#[derive(Subcommand)]
pub enum CropCommand {
    /// Add a crop to the library
    Add {
        /// Crop name
        name: String,
        #[command(flatten)]
        durations: DurationFlags,
    },
    /// List crops by name
    List,
    /// Set one stage duration
    Set {
        /// Crop id or unique prefix
        crop: String,
        /// Duration field, e.g. `seedling_days` or `seedling`
        field: DurationField,
        /// Days, fractions allowed
        days: String,
    },
    /// Remove a crop no batch uses
    Rm {
        /// Crop id or unique prefix
        crop: String,
    },
}

/// Per-stage overrides for `crop add`; unset flags keep the library defaults
#[derive(Args, Default)]
pub struct DurationFlags {
    #[arg(long, value_name = "DAYS")]
    pub sowing: Option<String>,
    #[arg(long, value_name = "DAYS")]
    pub seedling: Option<String>,
    #[arg(long, value_name = "DAYS")]
    pub germination: Option<String>,
    #[arg(long, value_name = "DAYS")]
    pub vegetative: Option<String>,
    #[arg(long, value_name = "DAYS")]
    pub harvest: Option<String>,
    #[arg(long, value_name = "DAYS")]
    pub packaging: Option<String>,
}

impl DurationFlags {
    /// Validated overrides in stage order
    pub fn overrides(&self) -> anyhow::Result<Vec<(DurationField, f64)>> {
        let flags = [
            (Stage::Sowing, &self.sowing),
            (Stage::Seedling, &self.seedling),
            (Stage::Germination, &self.germination),
            (Stage::Vegetative, &self.vegetative),
            (Stage::Harvest, &self.harvest),
            (Stage::Packaging, &self.packaging),
        ];
        let mut overrides = Vec::new();
        for (stage, raw) in flags {
            if let Some(raw) = raw {
                overrides.push((DurationField(stage), parse_days(stage, raw)?));
            }
        }
        Ok(overrides)
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct CropRow(Crop);

impl fmt::Display for CropRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crop = &self.0;
        write!(f, "{:<10} {:<20}", crop.id.short(8), crop.name)?;
        for stage in Stage::ALL {
            write!(f, " {:>6}", days(crop.days(DurationField(stage))))?;
        }
        Ok(())
    }
}

fn header() -> String {
    let mut header = format!("{:<10} {:<20}", "ID", "NAME");
    for stage in Stage::ALL {
        let short: String = stage.name().chars().take(6).collect();
        header.push_str(&format!(" {:>6}", short.to_uppercase()));
    }
    header
}

pub fn handle(ctx: &Context, command: CropCommand) -> anyhow::Result<()> {
    match command {
        CropCommand::Add { name, durations } => {
            let crop = ctx.farm.add_crop(&name, &durations.overrides()?)?;
            output::print(&CropRow(crop), ctx.format)
        }
        CropCommand::List => {
            let rows: Vec<CropRow> = ctx.farm.crops()?.into_iter().map(CropRow).collect();
            output::print_list(&rows, &header(), "No crops", ctx.format)
        }
        CropCommand::Set { crop, field, days } => {
            let crops = ctx.farm.crops()?;
            let target = resolve(&crops, &crop, "crop", |c| c.id.as_str())?;
            let days = parse_days(field.0, &days)?;
            let updated = ctx.farm.set_crop_duration(&target.id, field, days)?;
            output::print(&CropRow(updated), ctx.format)
        }
        CropCommand::Rm { crop } => {
            let crops = ctx.farm.crops()?;
            let target = resolve(&crops, &crop, "crop", |c| c.id.as_str())?;
            ctx.farm.remove_crop(&target.id)?;
            println!("Removed crop {}", target.name);
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "crop_tests.rs"]
mod tests;
