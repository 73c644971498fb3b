// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Query parameters for the events endpoint.

use jiff::Timestamp;

use crate::types::{EventKind, Platform};

/// Filter parameters for `GET /properties/{id}/events`.
///
/// All fields are optional; unset fields are omitted from the query
/// string entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQuery {
    start_date: Option<Timestamp>,
    end_date: Option<Timestamp>,
    platforms: Vec<Platform>,
    event_types: Vec<EventKind>,
}

impl EventQuery {
    /// Creates an empty query matching every event.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the query to events starting at or after `start`.
    #[must_use]
    pub const fn start_date(mut self, start: Timestamp) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Restricts the query to events ending at or before `end`.
    #[must_use]
    pub const fn end_date(mut self, end: Timestamp) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Adds a platform to the platform filter.
    #[must_use]
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platforms.push(platform);
        self
    }

    /// Adds an event kind to the kind filter.
    #[must_use]
    pub fn event_type(mut self, kind: EventKind) -> Self {
        self.event_types.push(kind);
        self
    }

    /// Renders the query as key/value pairs for the request URL.
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start_date {
            pairs.push(("start_date", start.to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date", end.to_string()));
        }
        for platform in &self.platforms {
            pairs.push(("platforms[]", platform.as_str().to_string()));
        }
        for kind in &self.event_types {
            pairs.push(("event_types[]", kind.as_str().to_string()));
        }
        pairs
    }
}
