// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Timestamp;
use staycal_api::{
    ConflictKind, ConflictRecord, ConflictStatus, ResolutionAction, ResolutionRequest, Severity,
};

use crate::error::FlowError;

/// A backend-detected conflict between two or more events of a property.
///
/// Conflicts are owned by the backend; this is a transient, invalidatable
/// copy. A resolved conflict never re-opens here — the backend creates a
/// fresh one if events are re-added.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Conflict {
    /// Unique identifier.
    pub id: String,
    /// The property the conflicting events belong to.
    pub property_id: String,
    /// Ids of the involved events (two or more).
    pub event_ids: Vec<String>,
    /// Backend classification.
    pub kind: ConflictKind,
    /// Severity derived from classification and platform mix.
    pub severity: Severity,
    /// Lifecycle state.
    pub status: ConflictStatus,
    /// When the backend detected the conflict.
    pub created_at: Timestamp,
    /// Last modification.
    pub updated_at: Timestamp,
}

impl Conflict {
    /// Validates a raw backend record into a [`Conflict`].
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Validation`] when the id is empty or fewer
    /// than two events are involved.
    pub fn from_record(record: ConflictRecord) -> Result<Self, FlowError> {
        if record.id.trim().is_empty() {
            return Err(FlowError::Validation(
                "conflict id must not be empty".into(),
            ));
        }
        if record.event_ids.len() < 2 {
            return Err(FlowError::Validation(format!(
                "conflict {}: must involve at least two events",
                record.id
            )));
        }

        Ok(Self {
            id: record.id,
            property_id: record.property_id,
            event_ids: record.event_ids,
            kind: record.conflict_type,
            severity: record.severity,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    /// Whether the given event is part of this conflict.
    #[must_use]
    pub fn involves(&self, event_id: &str) -> bool {
        self.event_ids.iter().any(|id| id == event_id)
    }

    /// The involved event ids with duplicates removed, input order kept.
    fn distinct_event_ids(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for id in &self.event_ids {
            if !seen.contains(&id.as_str()) {
                seen.push(id.as_str());
            }
        }
        seen
    }
}

/// The action chosen to resolve a conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionKind {
    /// Keep the earliest event, cancel the rest.
    KeepFirst,
    /// Keep the latest event, cancel the rest.
    KeepLast,
    /// Keep one explicitly chosen event. The id must be a member of the
    /// conflict's event set.
    KeepOne(String),
    /// Keep every involved event.
    KeepAll,
    /// Cancel every involved event.
    CancelAll,
    /// Mark for manual handling outside the system.
    Manual,
    /// Dismiss the conflict without resolving it.
    Ignore,
}

impl ResolutionKind {
    /// Human-readable label for menus and logs.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::KeepFirst => "Keep the first booking".to_string(),
            Self::KeepLast => "Keep the last booking".to_string(),
            Self::KeepOne(id) => format!("Keep only event {id}"),
            Self::KeepAll => "Keep all bookings".to_string(),
            Self::CancelAll => "Cancel all bookings".to_string(),
            Self::Manual => "Resolve manually".to_string(),
            Self::Ignore => "Dismiss without resolving".to_string(),
        }
    }
}

/// A resolution decision constructed by the caller.
///
/// Owned exclusively by the in-flight submission and discarded once the
/// submission succeeds or fails; it is never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionDecision {
    /// The conflict this decision targets.
    pub conflict_id: String,
    /// The chosen action.
    pub kind: ResolutionKind,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

impl ResolutionDecision {
    /// Creates a decision without notes.
    #[must_use]
    pub fn new(conflict_id: impl Into<String>, kind: ResolutionKind) -> Self {
        Self {
            conflict_id: conflict_id.into(),
            kind,
            notes: None,
        }
    }

    /// Renders the decision as the resolve endpoint's request body.
    pub(crate) fn to_request(&self) -> ResolutionRequest {
        let (resolution, event_id) = match &self.kind {
            ResolutionKind::KeepFirst => (ResolutionAction::KeepFirst, None),
            ResolutionKind::KeepLast => (ResolutionAction::KeepLast, None),
            ResolutionKind::KeepOne(id) => (ResolutionAction::KeepOne, Some(id.clone())),
            ResolutionKind::KeepAll => (ResolutionAction::KeepAll, None),
            ResolutionKind::CancelAll => (ResolutionAction::CancelAll, None),
            ResolutionKind::Manual => (ResolutionAction::Manual, None),
            ResolutionKind::Ignore => (ResolutionAction::Ignore, None),
        };

        ResolutionRequest {
            resolution,
            event_id,
            notes: self.notes.clone(),
        }
    }
}

/// One entry in the resolution menu offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOption {
    /// The action this option submits.
    pub kind: ResolutionKind,
    /// Display label.
    pub label: String,
}

impl From<ResolutionKind> for ResolutionOption {
    fn from(kind: ResolutionKind) -> Self {
        let label = kind.label();
        Self { kind, label }
    }
}

/// Builds the fixed menu of resolvable actions for a conflict.
///
/// Deterministic: depends only on the conflict's event set. The base menu
/// is keep-first, keep-last, cancel-all and manual; when the conflict has
/// at least two distinct events, one keep-this-event option is added per
/// event. A two-event conflict therefore yields six options.
#[must_use]
pub fn resolution_options(conflict: &Conflict) -> Vec<ResolutionOption> {
    let mut options: Vec<ResolutionOption> = vec![
        ResolutionKind::KeepFirst.into(),
        ResolutionKind::KeepLast.into(),
        ResolutionKind::CancelAll.into(),
        ResolutionKind::Manual.into(),
    ];

    let distinct = conflict.distinct_event_ids();
    if distinct.len() >= 2 {
        for event_id in distinct {
            options.push(ResolutionKind::KeepOne(event_id.to_string()).into());
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conflict(event_ids: &[&str]) -> Conflict {
        Conflict::from_record(ConflictRecord {
            id: "cfl-1".to_string(),
            property_id: "prop-1".to_string(),
            event_ids: event_ids.iter().map(ToString::to_string).collect(),
            conflict_type: ConflictKind::Overlap,
            severity: Severity::Critical,
            status: ConflictStatus::Active,
            created_at: "2025-06-01T00:00:00Z".parse().unwrap(),
            updated_at: "2025-06-01T00:00:00Z".parse().unwrap(),
        })
        .unwrap()
    }

    #[test]
    fn from_record_requires_two_events() {
        let record = ConflictRecord {
            id: "cfl-1".to_string(),
            property_id: "prop-1".to_string(),
            event_ids: vec!["evt-1".to_string()],
            conflict_type: ConflictKind::Overlap,
            severity: Severity::Warning,
            status: ConflictStatus::Active,
            created_at: "2025-06-01T00:00:00Z".parse().unwrap(),
            updated_at: "2025-06-01T00:00:00Z".parse().unwrap(),
        };

        assert!(matches!(
            Conflict::from_record(record),
            Err(FlowError::Validation(_))
        ));
    }

    #[test]
    fn two_event_conflict_yields_six_options() {
        let options = resolution_options(&conflict(&["evt-1", "evt-2"]));

        assert_eq!(options.len(), 6);
        assert_eq!(options[0].kind, ResolutionKind::KeepFirst);
        assert_eq!(options[1].kind, ResolutionKind::KeepLast);
        assert_eq!(options[2].kind, ResolutionKind::CancelAll);
        assert_eq!(options[3].kind, ResolutionKind::Manual);
        assert_eq!(
            options[4].kind,
            ResolutionKind::KeepOne("evt-1".to_string())
        );
        assert_eq!(
            options[5].kind,
            ResolutionKind::KeepOne("evt-2".to_string())
        );
    }

    #[test]
    fn three_event_conflict_yields_seven_options() {
        let options = resolution_options(&conflict(&["evt-1", "evt-2", "evt-3"]));
        assert_eq!(options.len(), 7);
    }

    #[test]
    fn duplicate_event_ids_produce_no_keep_one_options() {
        // Two entries but only one distinct event.
        let options = resolution_options(&conflict(&["evt-1", "evt-1"]));
        assert_eq!(options.len(), 4);
        assert!(
            options
                .iter()
                .all(|o| !matches!(o.kind, ResolutionKind::KeepOne(_)))
        );
    }

    #[test]
    fn decision_renders_keep_one_with_event_id() {
        let decision = ResolutionDecision::new(
            "cfl-1",
            ResolutionKind::KeepOne("evt-2".to_string()),
        );
        let request = decision.to_request();

        assert_eq!(request.resolution, ResolutionAction::KeepOne);
        assert_eq!(request.event_id.as_deref(), Some("evt-2"));
        assert!(request.notes.is_none());
    }
}
