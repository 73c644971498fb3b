// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Wire types for the booking backend.
//!
//! Every payload shape the backend owns is mirrored here as a typed
//! serde struct or enum, so malformed responses fail loudly at the
//! deserialization boundary instead of propagating partial data.

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Origin system of a booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Booked through Airbnb.
    Airbnb,
    /// Booked through Vrbo.
    Vrbo,
    /// Booked through Booking.com.
    Booking,
    /// Entered by hand in the dashboard.
    #[default]
    Manual,
    /// Any platform this client does not know about.
    #[serde(other)]
    Other,
}

impl Platform {
    /// The wire representation of the platform.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Airbnb => "airbnb",
            Self::Vrbo => "vrbo",
            Self::Booking => "booking",
            Self::Manual => "manual",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "airbnb" => Ok(Self::Airbnb),
            "vrbo" => Ok(Self::Vrbo),
            "booking" => Ok(Self::Booking),
            "manual" => Ok(Self::Manual),
            "other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

/// What a calendar event represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A guest booking.
    #[default]
    Booking,
    /// A manually blocked period.
    Blocked,
    /// A maintenance window.
    Maintenance,
}

impl EventKind {
    /// The wire representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Blocked => "blocked",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "booking" => Ok(Self::Booking),
            "blocked" => Ok(Self::Blocked),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(()),
        }
    }
}

/// Lifecycle status of a calendar event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// The event is confirmed.
    #[default]
    Confirmed,
    /// The event has been cancelled. Cancelled events cannot conflict.
    Cancelled,
    /// The event is tentative.
    Tentative,
}

impl EventStatus {
    /// The wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Tentative => "tentative",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend classification of a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// The event time ranges intersect.
    Overlap,
    /// The ranges touch or near-touch within the policy threshold.
    Adjacent,
    /// Back-to-back bookings that need a turnover buffer.
    Turnover,
}

impl ConflictKind {
    /// The wire representation of the classification.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overlap => "overlap",
            Self::Adjacent => "adjacent",
            Self::Turnover => "turnover",
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity the backend derived from classification and platform mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Requires immediate attention (e.g. double booking across platforms).
    Critical,
    /// Needs review.
    Warning,
    /// Informational only.
    Info,
}

impl Severity {
    /// The wire representation of the severity.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a conflict.
///
/// A resolved conflict never re-opens; if events are re-added the backend
/// creates a fresh conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictStatus {
    /// Awaiting a resolution decision.
    Active,
    /// A resolution was submitted and accepted.
    Resolved,
    /// Explicitly dismissed without resolving.
    Ignored,
}

impl ConflictStatus {
    /// The wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Resolved => "resolved",
            Self::Ignored => "ignored",
        }
    }
}

impl fmt::Display for ConflictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "resolved" => Ok(Self::Resolved),
            "ignored" => Ok(Self::Ignored),
            _ => Err(()),
        }
    }
}

/// Resolution action accepted by the resolve endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionAction {
    /// Keep the earliest event, cancel the rest.
    KeepFirst,
    /// Keep the latest event, cancel the rest.
    KeepLast,
    /// Keep one explicitly chosen event (requires `event_id`).
    KeepOne,
    /// Keep every involved event.
    KeepAll,
    /// Cancel every involved event.
    CancelAll,
    /// Mark for manual handling outside the system.
    Manual,
    /// Dismiss the conflict without resolving it.
    Ignore,
}

/// A calendar event record as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique identifier.
    pub id: String,
    /// The property this event belongs to.
    pub property_id: String,
    /// Origin system of the booking.
    pub platform: Platform,
    /// What the event represents.
    pub event_type: EventKind,
    /// Lifecycle status.
    pub status: EventStatus,
    /// Title/summary.
    pub title: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Start instant (inclusive).
    pub start_date: Timestamp,
    /// End instant (exclusive).
    pub end_date: Timestamp,
}

/// A conflict record as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictRecord {
    /// Unique identifier.
    pub id: String,
    /// The property the conflicting events belong to.
    pub property_id: String,
    /// Ids of the involved events (two or more).
    pub event_ids: Vec<String>,
    /// Backend classification.
    pub conflict_type: ConflictKind,
    /// Derived severity.
    pub severity: Severity,
    /// Lifecycle state.
    pub status: ConflictStatus,
    /// When the backend detected the conflict.
    pub created_at: Timestamp,
    /// Last modification.
    pub updated_at: Timestamp,
}

/// Body of `POST /properties/{id}/conflicts/{cid}/resolve`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionRequest {
    /// The chosen action.
    pub resolution: ResolutionAction,
    /// The event to keep, when `resolution` is [`ResolutionAction::KeepOne`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// Optional free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Success/failure envelope of the resolve endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveResponse {
    /// Whether the backend applied the resolution.
    pub success: bool,
    /// Server-provided message, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of the availability endpoint.
///
/// Availability truth always comes from the server; the client never
/// re-derives it locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// Whether the requested window is free.
    pub is_available: bool,
    /// Events blocking the window, when not available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicting_events: Option<Vec<EventRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_unknown_value_maps_to_other() {
        let platform: Platform = serde_json::from_str("\"tripadvisor\"").unwrap();
        assert_eq!(platform, Platform::Other);
    }

    #[test]
    fn event_record_round_trips_snake_case() {
        let json = r#"{
            "id": "evt-1",
            "property_id": "prop-1",
            "platform": "airbnb",
            "event_type": "booking",
            "status": "confirmed",
            "title": "Guest stay",
            "start_date": "2025-06-01T14:00:00Z",
            "end_date": "2025-06-05T11:00:00Z"
        }"#;

        let record: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.platform, Platform::Airbnb);
        assert_eq!(record.event_type, EventKind::Booking);
        assert!(record.description.is_none());
        assert!(record.start_date < record.end_date);
    }

    #[test]
    fn conflict_record_rejects_unknown_classification() {
        let json = r#"{
            "id": "cfl-1",
            "property_id": "prop-1",
            "event_ids": ["evt-1", "evt-2"],
            "conflict_type": "mystery",
            "severity": "critical",
            "status": "active",
            "created_at": "2025-06-01T00:00:00Z",
            "updated_at": "2025-06-01T00:00:00Z"
        }"#;

        assert!(serde_json::from_str::<ConflictRecord>(json).is_err());
    }

    #[test]
    fn resolution_request_omits_empty_fields() {
        let request = ResolutionRequest {
            resolution: ResolutionAction::CancelAll,
            event_id: None,
            notes: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"resolution":"cancel_all"}"#);
    }
}
