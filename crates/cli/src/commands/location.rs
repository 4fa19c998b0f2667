// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Station commands

use super::Context;
use crate::output;
use clap::{Args, Subcommand};
use kb_core::Location;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct LocationArgs {
    #[command(subcommand)]
    pub command: LocationCommand,
}

#[derive(Subcommand)]
pub enum LocationCommand {
    /// Register a station
    Add {
        /// Station name
        name: String,
    },
    /// List stations in the order they were added
    List,
}

#[derive(Serialize)]
#[serde(transparent)]
struct LocationRow(Location);

impl fmt::Display for LocationRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} {}", self.0.id.short(8), self.0.name)
    }
}

pub fn handle(ctx: &Context, command: LocationCommand) -> anyhow::Result<()> {
    match command {
        LocationCommand::Add { name } => {
            let location = ctx.farm.add_location(&name)?;
            output::print(&LocationRow(location), ctx.format)
        }
        LocationCommand::List => {
            let rows: Vec<LocationRow> = ctx
                .farm
                .locations()?
                .into_iter()
                .map(LocationRow)
                .collect();
            let header = format!("{:<10} NAME", "ID");
            output::print_list(&rows, &header, "No locations", ctx.format)
        }
    }
}
