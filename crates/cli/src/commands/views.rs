// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Derived views: timeline, staging pipeline, farm map

use super::Context;
use crate::output;
use kb_core::{PipelineView, StationMap, TimelineReport};
use std::fmt::{self, Write as _};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn timeline(ctx: &Context) -> anyhow::Result<()> {
    let dashboard = ctx.farm.dashboard()?;
    output::print_view(&dashboard.timeline, ctx.format, render_timeline)
}

pub fn pipeline(ctx: &Context) -> anyhow::Result<()> {
    let dashboard = ctx.farm.dashboard()?;
    output::print_view(&dashboard.pipeline, ctx.format, render_pipeline)
}

pub fn map(ctx: &Context) -> anyhow::Result<()> {
    let dashboard = ctx.farm.dashboard()?;
    output::print_view(&dashboard.stations, ctx.format, render_map)
}

pub fn render_timeline(report: &TimelineReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if report.timelines.is_empty() && report.skipped.is_empty() {
        out.push_str("No batches\n");
        return Ok(out);
    }

    for timeline in &report.timelines {
        writeln!(out, "{} ({})", timeline.crop_name, timeline.batch_id.short(8))?;
        for event in &timeline.events {
            writeln!(
                out,
                "  {:<28} {} -> {}  {}",
                event.label,
                event.starts_at.format(TIME_FORMAT),
                event.ends_at.format(TIME_FORMAT),
                event.color(),
            )?;
        }
    }
    for skipped in &report.skipped {
        writeln!(
            out,
            "skipped {} (crop {}): {}",
            skipped.batch_id.short(8),
            skipped.crop_id.short(8),
            skipped.reason
        )?;
    }
    Ok(out)
}

pub fn render_pipeline(view: &PipelineView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for column in &view.columns {
        writeln!(
            out,
            "{} [{}] ({})",
            column.stage.name().to_uppercase(),
            column.color,
            column.batches.len()
        )?;
        for entry in &column.batches {
            writeln!(out, "  {:<10} {}", entry.batch.id.short(8), entry.crop.name)?;
        }
    }
    if !view.unrecognized.is_empty() {
        writeln!(out, "UNRECOGNIZED ({})", view.unrecognized.len())?;
        for entry in &view.unrecognized {
            writeln!(
                out,
                "  {:<10} {} stage={:?}",
                entry.batch.id.short(8),
                entry.crop.name,
                entry.batch.stage
            )?;
        }
    }
    Ok(out)
}

pub fn render_map(map: &StationMap) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if map.tiles.is_empty() {
        out.push_str("No locations\n");
        return Ok(out);
    }
    for tile in &map.tiles {
        let stage = tile
            .occupant
            .as_ref()
            .map_or("-", |o| o.batch.stage.as_str());
        writeln!(
            out,
            "{:<16} {:<20} {:<12} {}",
            tile.location.name,
            tile.caption(),
            stage,
            tile.color
        )?;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "views_tests.rs"]
mod tests;
