// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Pure event filtering and interval-overlap detection.
//!
//! Everything in this module is synchronous and side-effect-free: inputs
//! are never mutated and results do not depend on iteration order of any
//! set. Events are assumed to be valid (see [`Event::from_record`]); a
//! malformed event simply never produces a pair.
//!
//! [`Event::from_record`]: crate::Event::from_record

use std::collections::BTreeMap;

use jiff::Timestamp;
use staycal_api::{EventKind, Platform};

use crate::event::Event;

/// Filter criteria for calendar display.
///
/// All fields are optional and combined with logical AND; the default
/// (empty) filter matches every event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    /// Case-insensitive substring match against the title.
    pub search: Option<String>,
    /// Keep only events from these platforms.
    pub platforms: Option<Vec<Platform>>,
    /// Keep only events of these kinds.
    pub kinds: Option<Vec<EventKind>>,
    /// Keep only events starting at or after this instant.
    pub from: Option<Timestamp>,
    /// Keep only events ending at or before this instant.
    pub to: Option<Timestamp>,
}

/// Returns the events matching the filter, preserving input order.
///
/// The date window is a containment test, not an intersection test: an
/// event qualifies only when it lies fully inside `[from, to]`. An event
/// that merely crosses a window boundary is excluded. This matches the
/// dashboard's observed behavior and is kept deliberately.
#[must_use]
pub fn filter_events(events: &[Event], filter: &EventFilter) -> Vec<Event> {
    let needle = filter.search.as_ref().map(|s| s.to_lowercase());

    events
        .iter()
        .filter(|event| {
            if let Some(needle) = &needle
                && !event.title.to_lowercase().contains(needle)
            {
                return false;
            }
            if let Some(platforms) = &filter.platforms
                && !platforms.contains(&event.platform)
            {
                return false;
            }
            if let Some(kinds) = &filter.kinds
                && !kinds.contains(&event.kind)
            {
                return false;
            }
            if let Some(from) = filter.from
                && event.start < from
            {
                return false;
            }
            if let Some(to) = filter.to
                && event.end > to
            {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

/// An unordered pair of overlapping event ids.
///
/// The two ids are stored in lexicographic order so pairs compare equal
/// regardless of which event was encountered first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct OverlapPair {
    /// The lexicographically smaller event id.
    pub first: String,
    /// The lexicographically larger event id.
    pub second: String,
}

impl OverlapPair {
    /// Creates a canonical pair from two event ids.
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                first: a.to_string(),
                second: b.to_string(),
            }
        } else {
            Self {
                first: b.to_string(),
                second: a.to_string(),
            }
        }
    }
}

/// Finds every pair of events on the same property whose time ranges
/// intersect.
///
/// Semantics are strictly half-open: `a` and `b` overlap iff
/// `a.start < b.end && b.start < a.end`. Ranges that merely touch at a
/// boundary instant do not overlap. Cancelled events cannot conflict and
/// are excluded entirely.
///
/// The sweep sorts each property's events by start (stable, so ties keep
/// input order) and keeps a running set of still-open events, which is
/// O(n log n + k) for k reported pairs instead of the naive all-pairs
/// scan. The returned list is sorted by the canonical pair key, so the
/// result is identical for any permutation of the input.
#[must_use]
pub fn detect_overlaps(events: &[Event]) -> Vec<OverlapPair> {
    // Group by property, preserving input order within each group.
    let mut groups: BTreeMap<&str, Vec<&Event>> = BTreeMap::new();
    for event in events {
        if event.is_cancelled() {
            continue;
        }
        groups
            .entry(event.property_id.as_str())
            .or_default()
            .push(event);
    }

    let mut pairs = Vec::new();
    for group in groups.values_mut() {
        group.sort_by_key(|event| event.start);

        let mut open: Vec<&Event> = Vec::new();
        for event in group.iter() {
            // Anything that ended at or before this start is closed now.
            open.retain(|other| other.end > event.start);
            for other in &open {
                pairs.push(OverlapPair::new(&other.id, &event.id));
            }
            open.push(event);
        }
    }

    pairs.sort();
    pairs.dedup();
    pairs
}
