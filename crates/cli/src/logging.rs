// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File logging; stdout stays reserved for command output

use crate::config::{Config, ConfigError, LOG_ENV};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn setup_logging(config: &Config) -> Result<WorkerGuard, ConfigError> {
    let dir = config.log_path.parent().ok_or(ConfigError::NoStateDir)?;
    let file_name = config.log_path.file_name().ok_or(ConfigError::NoStateDir)?;
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let fallback = config.settings.log.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(guard)
}
