// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch commands

use super::lookup::resolve;
use super::Context;
use crate::output;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use kb_core::{Batch, BatchWithCrop, Stage};
use kb_engine::AdvanceOutcome;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct BatchArgs {
    #[command(subcommand)]
    pub command: BatchCommand,
}

#[derive(Subcommand)]
pub enum BatchCommand {
    /// Start a batch at sowing
    Start {
        /// Crop id or unique prefix
        crop: String,
        /// Location id or unique prefix
        location: String,
        /// Sowing time (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// List batches in the order they were started
    List,
    /// Move a batch to its next stage
    Advance {
        /// Batch id or unique prefix
        batch: String,
    },
    /// Remove a batch
    Rm {
        /// Batch id or unique prefix
        batch: String,
    },
}

#[derive(Serialize)]
struct BatchRow {
    #[serde(flatten)]
    batch: Batch,
    crop_name: String,
}

impl BatchRow {
    fn new(batch: Batch, crop_name: &str) -> Self {
        Self {
            batch,
            crop_name: crop_name.to_string(),
        }
    }
}

impl From<BatchWithCrop> for BatchRow {
    fn from(entry: BatchWithCrop) -> Self {
        Self {
            batch: entry.batch,
            crop_name: entry.crop.name,
        }
    }
}

impl fmt::Display for BatchRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} {:<20} {:<12} {:<10} {}",
            self.batch.id.short(8),
            self.crop_name,
            self.batch.stage,
            self.batch.location_id.short(8),
            self.batch.started_at.format("%Y-%m-%d %H:%M"),
        )
    }
}

/// Result of `batch advance`
#[derive(Serialize)]
struct AdvanceReport {
    id: String,
    advanced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<Stage>,
    stage: String,
}

impl From<&AdvanceOutcome> for AdvanceReport {
    fn from(outcome: &AdvanceOutcome) -> Self {
        let batch = outcome.batch();
        let from = match outcome {
            AdvanceOutcome::Advanced { from, .. } => Some(*from),
            AdvanceOutcome::AlreadyTerminal { .. } => None,
        };
        Self {
            id: batch.id.to_string(),
            advanced: from.is_some(),
            from,
            stage: batch.stage.clone(),
        }
    }
}

impl fmt::Display for AdvanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.from {
            Some(from) => write!(f, "Advanced {}: {} -> {}", self.id, from, self.stage),
            None => write!(f, "Batch {} is already at {}; nothing to do", self.id, self.stage),
        }
    }
}

pub fn handle(ctx: &Context, command: BatchCommand) -> anyhow::Result<()> {
    match command {
        BatchCommand::Start { crop, location, at } => {
            let crops = ctx.farm.crops()?;
            let crop = resolve(&crops, &crop, "crop", |c| c.id.as_str())?;
            let locations = ctx.farm.locations()?;
            let location = resolve(&locations, &location, "location", |l| l.id.as_str())?;

            let batch = ctx.farm.start_batch(&crop.id, &location.id, at)?;
            output::print(&BatchRow::new(batch, &crop.name), ctx.format)
        }
        BatchCommand::List => {
            let rows: Vec<BatchRow> = ctx.farm.batches()?.into_iter().map(BatchRow::from).collect();
            let header = format!(
                "{:<10} {:<20} {:<12} {:<10} STARTED",
                "ID", "CROP", "STAGE", "LOCATION"
            );
            output::print_list(&rows, &header, "No batches", ctx.format)
        }
        BatchCommand::Advance { batch } => {
            let batches = ctx.farm.batches()?;
            let target = resolve(&batches, &batch, "batch", |b| b.batch.id.as_str())?;
            let outcome = ctx.farm.advance_batch(&target.batch.id)?;
            output::print(&AdvanceReport::from(&outcome), ctx.format)
        }
        BatchCommand::Rm { batch } => {
            let batches = ctx.farm.batches()?;
            let target = resolve(&batches, &batch, "batch", |b| b.batch.id.as_str())?;
            ctx.farm.remove_batch(&target.batch.id)?;
            println!("Removed batch {}", target.batch.id);
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
