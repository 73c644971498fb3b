// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Timestamp;
use staycal_api::{EventKind, EventRecord, EventStatus, Platform};

use crate::error::FlowError;

/// A validated calendar event for a property.
///
/// The time range is half-open: the event occupies `[start, end)`.
/// Construction through [`Event::from_record`] is the single validation
/// point; code downstream of it may assume `start < end` and non-empty
/// identifiers.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Event {
    /// Unique identifier.
    pub id: String,
    /// The property this event belongs to.
    pub property_id: String,
    /// Origin system of the booking.
    pub platform: Platform,
    /// What the event represents.
    pub kind: EventKind,
    /// Lifecycle status.
    pub status: EventStatus,
    /// Title/summary.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Start instant (inclusive).
    pub start: Timestamp,
    /// End instant (exclusive).
    pub end: Timestamp,
}

impl Event {
    /// Validates a raw backend record into an [`Event`].
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Validation`] when the id or property id is
    /// empty, or when the time range is inverted or empty (`end <= start`).
    pub fn from_record(record: EventRecord) -> Result<Self, FlowError> {
        if record.id.trim().is_empty() {
            return Err(FlowError::Validation("event id must not be empty".into()));
        }
        if record.property_id.trim().is_empty() {
            return Err(FlowError::Validation(format!(
                "event {}: property id must not be empty",
                record.id
            )));
        }
        if record.end_date <= record.start_date {
            return Err(FlowError::Validation(format!(
                "event {}: end must be after start",
                record.id
            )));
        }

        Ok(Self {
            id: record.id,
            property_id: record.property_id,
            platform: record.platform,
            kind: record.event_type,
            status: record.status,
            title: record.title,
            description: record.description,
            start: record.start_date,
            end: record.end_date,
        })
    }

    /// Validates a batch of backend records, failing on the first bad one.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the first rejected record.
    pub fn from_records(records: Vec<EventRecord>) -> Result<Vec<Self>, FlowError> {
        records.into_iter().map(Self::from_record).collect()
    }

    /// Whether the event has been cancelled. Cancelled events are
    /// excluded from overlap detection entirely.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status == EventStatus::Cancelled
    }
}

/// Display color for an event in a calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorKey {
    /// Manually blocked periods.
    Slate,
    /// Maintenance windows.
    Amber,
    /// Airbnb bookings.
    Red,
    /// Vrbo bookings.
    Blue,
    /// Booking.com bookings.
    Indigo,
    /// Manual bookings.
    Green,
    /// Bookings from unrecognized platforms.
    Gray,
}

impl ColorKey {
    /// Lowercase name of the color key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Slate => "slate",
            Self::Amber => "amber",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Green => "green",
            Self::Gray => "gray",
        }
    }
}

/// Maps an event to its display color.
///
/// Kind-based rules always win over platform-based rules: a blocked
/// period keeps its color no matter which platform created it, and
/// maintenance windows take precedence over everything but blocks.
#[must_use]
pub const fn color_for_event(event: &Event) -> ColorKey {
    match event.kind {
        EventKind::Blocked => ColorKey::Slate,
        EventKind::Maintenance => ColorKey::Amber,
        EventKind::Booking => match event.platform {
            Platform::Airbnb => ColorKey::Red,
            Platform::Vrbo => ColorKey::Blue,
            Platform::Booking => ColorKey::Indigo,
            Platform::Manual => ColorKey::Green,
            Platform::Other => ColorKey::Gray,
        },
    }
}
