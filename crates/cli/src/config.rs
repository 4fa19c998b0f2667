// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State directory and settings resolution

use crate::output::OutputFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides the state directory when `--state-dir` is absent
pub const STATE_DIR_ENV: &str = "KEBUN_STATE_DIR";
/// Log filter, e.g. `debug` or `kb_engine=trace`
pub const LOG_ENV: &str = "KEBUN_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a state directory; pass --state-dir or set KEBUN_STATE_DIR")]
    NoStateDir,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Optional `config.toml` in the state directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Log filter used when `KEBUN_LOG` is unset
    pub log: Option<String>,
    /// Output format used when `--output` is absent
    pub output: Option<OutputFormat>,
}

impl Settings {
    pub fn parse(path: &Path, raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read settings, treating a missing file as empty
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::parse(path, &raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Paths derived from the state directory
#[derive(Debug, Clone)]
pub struct Config {
    pub state_dir: PathBuf,
    /// Write-ahead log of farm operations
    pub wal_path: PathBuf,
    pub log_path: PathBuf,
    pub settings_path: PathBuf,
    pub settings: Settings,
}

impl Config {
    /// Resolve the state directory and read its settings
    pub fn load(flag: Option<PathBuf>) -> Result<Self, ConfigError> {
        let env = std::env::var_os(STATE_DIR_ENV).map(PathBuf::from);
        let state_dir = resolve_state_dir(flag, env, dirs::data_local_dir())?;
        let mut config = Self::for_state_dir(state_dir);
        config.settings = Settings::load(&config.settings_path)?;
        Ok(config)
    }

    pub fn for_state_dir(state_dir: PathBuf) -> Self {
        Self {
            wal_path: state_dir.join("wal").join("farm.wal"),
            log_path: state_dir.join("kebun.log"),
            settings_path: state_dir.join("config.toml"),
            settings: Settings::default(),
            state_dir,
        }
    }

    /// Flag wins over settings; text when neither says
    pub fn output(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.settings.output).unwrap_or(OutputFormat::Text)
    }
}

/// `--state-dir`, then the environment, then `<data_local_dir>/kebun`
pub fn resolve_state_dir(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    data_local: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    flag.or(env.filter(|p| !p.as_os_str().is_empty()))
        .or_else(|| data_local.map(|d| d.join("kebun")))
        .ok_or(ConfigError::NoStateDir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
