// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Table and JSON rendering for events, conflicts and overlap pairs.

use std::error::Error;

use colored::Color;
use staycal_api::Severity;
use staycal_core::{ColorKey, Conflict, Event, OverlapPair, color_for_event};

use crate::table::{Align, Column, render};
use crate::util::{ArgOutputFormat, format_timestamp};

/// Maps an event's display color to a terminal color.
const fn terminal_color(key: ColorKey) -> Color {
    match key {
        ColorKey::Slate | ColorKey::Gray => Color::BrightBlack,
        ColorKey::Amber => Color::Yellow,
        ColorKey::Red => Color::Red,
        ColorKey::Blue => Color::Blue,
        ColorKey::Indigo => Color::Magenta,
        ColorKey::Green => Color::Green,
    }
}

const fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Cyan,
    }
}

pub fn format_events(events: &[Event], format: ArgOutputFormat) -> Result<String, Box<dyn Error>> {
    match format {
        ArgOutputFormat::Json => Ok(serde_json::to_string_pretty(events)?),
        ArgOutputFormat::Table => {
            let columns: Vec<Column<Event>> = vec![
                Column {
                    header: "Id",
                    align: Align::Left,
                    format: |e| e.id.clone(),
                    color: |_| None,
                },
                Column {
                    header: "Platform",
                    align: Align::Left,
                    format: |e| e.platform.as_str().to_string(),
                    color: |e| Some(terminal_color(color_for_event(e))),
                },
                Column {
                    header: "Kind",
                    align: Align::Left,
                    format: |e| e.kind.as_str().to_string(),
                    color: |e| Some(terminal_color(color_for_event(e))),
                },
                Column {
                    header: "Status",
                    align: Align::Left,
                    format: |e| e.status.as_str().to_string(),
                    color: |_| None,
                },
                Column {
                    header: "When",
                    align: Align::Left,
                    format: |e| {
                        format!("{} ~ {}", format_timestamp(e.start), format_timestamp(e.end))
                    },
                    color: |_| None,
                },
                Column {
                    header: "Title",
                    align: Align::Left,
                    format: |e| e.title.clone(),
                    color: |_| None,
                },
            ];
            Ok(render(&columns, events))
        }
    }
}

pub fn format_conflicts(
    conflicts: &[Conflict],
    format: ArgOutputFormat,
) -> Result<String, Box<dyn Error>> {
    match format {
        ArgOutputFormat::Json => Ok(serde_json::to_string_pretty(conflicts)?),
        ArgOutputFormat::Table => {
            let columns: Vec<Column<Conflict>> = vec![
                Column {
                    header: "Id",
                    align: Align::Left,
                    format: |c| c.id.clone(),
                    color: |_| None,
                },
                Column {
                    header: "Kind",
                    align: Align::Left,
                    format: |c| c.kind.as_str().to_string(),
                    color: |_| None,
                },
                Column {
                    header: "Severity",
                    align: Align::Left,
                    format: |c| c.severity.as_str().to_string(),
                    color: |c| Some(severity_color(c.severity)),
                },
                Column {
                    header: "Status",
                    align: Align::Left,
                    format: |c| c.status.as_str().to_string(),
                    color: |_| None,
                },
                Column {
                    header: "Detected",
                    align: Align::Left,
                    format: |c| format_timestamp(c.created_at),
                    color: |_| None,
                },
                Column {
                    header: "Events",
                    align: Align::Left,
                    format: |c| c.event_ids.join(", "),
                    color: |_| None,
                },
            ];
            Ok(render(&columns, conflicts))
        }
    }
}

pub fn format_overlaps(
    pairs: &[OverlapPair],
    format: ArgOutputFormat,
) -> Result<String, Box<dyn Error>> {
    match format {
        ArgOutputFormat::Json => Ok(serde_json::to_string_pretty(pairs)?),
        ArgOutputFormat::Table => {
            let columns: Vec<Column<OverlapPair>> = vec![
                Column {
                    header: "Event",
                    align: Align::Left,
                    format: |p| p.first.clone(),
                    color: |_| Some(Color::Red),
                },
                Column {
                    header: "Overlaps",
                    align: Align::Left,
                    format: |p| p.second.clone(),
                    color: |_| Some(Color::Red),
                },
            ];
            Ok(render(&columns, pairs))
        }
    }
}
