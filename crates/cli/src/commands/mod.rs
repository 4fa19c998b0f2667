// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod batch;
pub mod crop;
pub mod location;
pub mod lookup;
pub mod views;

use crate::config::Config;
use crate::output::OutputFormat;
use anyhow::Context as _;
use kb_core::{SystemClock, UuidIdGen};
use kb_engine::Farm;
use kb_storage::{TracedStore, WalStore};

pub type CliFarm = Farm<TracedStore<WalStore>, SystemClock, UuidIdGen>;

/// What every command runs against
pub struct Context {
    pub farm: CliFarm,
    pub format: OutputFormat,
}

impl Context {
    pub fn open(config: &Config, format: OutputFormat) -> anyhow::Result<Self> {
        let store = WalStore::open(&config.wal_path)
            .with_context(|| format!("failed to open {}", config.wal_path.display()))?;
        Ok(Self {
            farm: Farm::new(TracedStore::new(store), SystemClock, UuidIdGen),
            format,
        })
    }
}
