// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kb - Kebun farm tracker CLI

mod commands;
mod config;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{batch, crop, location, views, Context};
use std::path::PathBuf;

use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "kb",
    version,
    about = "Kebun - track crop batches through their growth stages"
)]
struct Cli {
    /// State directory (defaults to KEBUN_STATE_DIR, then the user data dir)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crop library management
    Crop(crop::CropArgs),
    /// Station management
    Location(location::LocationArgs),
    /// Batch management
    Batch(batch::BatchArgs),
    /// Projected stage timeline for every batch
    Timeline,
    /// Batches grouped by current stage
    Pipeline,
    /// Which batch occupies each station
    Map,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.state_dir)?;
    let _log_guard = logging::setup_logging(&config)?;
    let format = config.output(cli.output);

    tracing::debug!(state_dir = %config.state_dir.display(), "starting kb");
    let ctx = Context::open(&config, format)?;

    let result = match cli.command {
        Commands::Crop(args) => crop::handle(&ctx, args.command),
        Commands::Location(args) => location::handle(&ctx, args.command),
        Commands::Batch(args) => batch::handle(&ctx, args.command),
        Commands::Timeline => views::timeline(&ctx),
        Commands::Pipeline => views::pipeline(&ctx),
        Commands::Map => views::map(&ctx),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "command failed");
    }
    result
}
