// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print one value in the requested format
pub fn print<T: Serialize + Display>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", value);
            Ok(())
        }
        OutputFormat::Json => print_json(value),
    }
}

/// Print rows under a header; `empty` is shown instead when there are none
pub fn print_list<T: Serialize + Display>(
    items: &[T],
    header: &str,
    empty: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if items.is_empty() {
                println!("{}", empty);
            } else {
                println!("{}", header);
                for item in items {
                    println!("{}", item);
                }
            }
            Ok(())
        }
        OutputFormat::Json => print_json(items),
    }
}

/// Print a derived view: JSON as-is, text through `render`
pub fn print_view<T: Serialize>(
    value: &T,
    format: OutputFormat,
    render: impl FnOnce(&T) -> Result<String, std::fmt::Error>,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", render(value)?);
            Ok(())
        }
        OutputFormat::Json => print_json(value),
    }
}

/// Days for a duration column, `-` when unset
pub fn days(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |d| d.to_string())
}
