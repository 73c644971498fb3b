// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client-side conflict resolution state machine.
//!
//! The flow fetches conflicts for one property, builds resolution menus,
//! submits decisions and reconciles afterwards purely by invalidation:
//! a successful submission never patches local copies (the backend may
//! cancel or alter events as a side effect of resolving), it only tells
//! subscribers to refetch.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use staycal_api::{BookingApiClient, ConflictStatus};

use crate::conflict::{Conflict, ResolutionDecision, ResolutionKind, ResolutionOption};
use crate::error::FlowError;

/// Observable state of a [`ConflictResolutionFlow`].
///
/// `Loading` and `Submitting` each cover exactly one network round trip.
/// `LoadFailed` permits retrying the load; `SubmitFailed` permits retrying
/// the same decision (which it carries, so the caller never has to
/// re-choose). `Resolved` is terminal for that conflict.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    /// Nothing loaded yet.
    Idle,
    /// A conflict fetch is in flight.
    Loading,
    /// Conflicts are loaded and decisions can be built against them.
    Loaded {
        /// The conflicts fetched for the property.
        conflicts: Vec<Conflict>,
    },
    /// The conflict fetch failed.
    LoadFailed {
        /// The normalized failure.
        error: FlowError,
    },
    /// A resolution submission is in flight for one conflict.
    Submitting {
        /// The conflict being resolved.
        conflict_id: String,
    },
    /// The backend accepted the resolution (or dismissal). Callers must
    /// refetch both the conflicts list and the property's events.
    Resolved {
        /// The conflict that was resolved.
        conflict_id: String,
    },
    /// The submission failed; the conflict is unchanged on both sides.
    SubmitFailed {
        /// The conflict the submission targeted.
        conflict_id: String,
        /// The decision that failed, kept so the caller can re-offer it.
        decision: ResolutionDecision,
        /// The normalized failure.
        error: FlowError,
    },
}

/// Subscriber to flow transitions.
///
/// Any UI layer — or none, for headless tests — can subscribe and
/// re-render on transition instead of relying on a reactive framework.
pub trait FlowObserver: Send + Sync {
    /// Called after every state transition.
    fn on_transition(&self, state: &FlowState);

    /// Called after a successful submit or dismiss. The caller must
    /// invalidate and refetch both the property's conflicts and its
    /// events; the backend may have cancelled or altered events as a
    /// side effect of the resolution.
    fn on_invalidate(&self, _property_id: &str) {}
}

struct Inner {
    state: FlowState,
    conflicts: Vec<Conflict>,
    in_flight: HashSet<String>,
    resolved: HashSet<String>,
}

/// Conflict resolution workflow for one property.
///
/// Operations on one conflict are strictly sequenced: a decision can only
/// be built and submitted against a loaded conflict, a second submission
/// for the same conflict while one is in flight is rejected with
/// [`FlowError::Busy`], and a resolved conflict stays resolved. Different
/// conflicts interleave freely.
pub struct ConflictResolutionFlow {
    client: BookingApiClient,
    property_id: String,
    inner: Mutex<Inner>,
    observers: Mutex<Vec<Arc<dyn FlowObserver>>>,
}

impl fmt::Debug for ConflictResolutionFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConflictResolutionFlow")
            .field("property_id", &self.property_id)
            .field("state", &self.lock().state)
            .finish_non_exhaustive()
    }
}

impl ConflictResolutionFlow {
    /// Creates an idle flow for a property.
    #[must_use]
    pub fn new(client: BookingApiClient, property_id: impl Into<String>) -> Self {
        Self {
            client,
            property_id: property_id.into(),
            inner: Mutex::new(Inner {
                state: FlowState::Idle,
                conflicts: Vec::new(),
                in_flight: HashSet::new(),
                resolved: HashSet::new(),
            }),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// The property this flow operates on.
    #[must_use]
    pub fn property_id(&self) -> &str {
        &self.property_id
    }

    /// A snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> FlowState {
        self.lock().state.clone()
    }

    /// Registers an observer notified on every transition.
    pub fn subscribe(&self, observer: Arc<dyn FlowObserver>) {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    /// Fetches conflicts for the property, optionally filtered by
    /// lifecycle state.
    ///
    /// Fails fast with a validation error — without issuing a network
    /// call — when the property id is empty.
    ///
    /// # Errors
    ///
    /// Returns the same error that the resulting `LoadFailed` state
    /// carries, or the validation error for a missing property id.
    pub async fn load_conflicts(
        &self,
        status: Option<ConflictStatus>,
    ) -> Result<Vec<Conflict>, FlowError> {
        if self.property_id.trim().is_empty() {
            return Err(FlowError::Validation(
                "property id must not be empty".into(),
            ));
        }

        self.transition(FlowState::Loading);

        let loaded = match self.client.list_conflicts(&self.property_id, status).await {
            Ok(records) => records
                .into_iter()
                .map(Conflict::from_record)
                .collect::<Result<Vec<_>, _>>(),
            Err(e) => Err(FlowError::from(e)),
        };

        match loaded {
            Ok(conflicts) => {
                tracing::debug!(
                    property_id = self.property_id,
                    count = conflicts.len(),
                    "conflicts loaded"
                );
                self.lock().conflicts = conflicts.clone();
                self.transition(FlowState::Loaded {
                    conflicts: conflicts.clone(),
                });
                Ok(conflicts)
            }
            Err(error) => {
                tracing::warn!(property_id = self.property_id, %error, "conflict load failed");
                self.transition(FlowState::LoadFailed {
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    /// Builds the resolution menu for a loaded conflict.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the conflict is not in the loaded
    /// list.
    pub fn resolution_options(&self, conflict_id: &str) -> Result<Vec<ResolutionOption>, FlowError> {
        let inner = self.lock();
        let conflict = Self::find(&inner, conflict_id)?;
        Ok(crate::conflict::resolution_options(conflict))
    }

    /// Submits a resolution decision.
    ///
    /// Validation happens before any network call: the conflict must be
    /// loaded and not yet resolved, and a keep-one decision must name a
    /// member of the conflict's event set. While a submission is in
    /// flight for the same conflict, further submissions are rejected
    /// with [`FlowError::Busy`].
    ///
    /// On success the flow transitions to `Resolved` and notifies
    /// subscribers to invalidate; on failure it transitions to
    /// `SubmitFailed` and leaves the conflict untouched — local state is
    /// never mutated optimistically.
    ///
    /// # Errors
    ///
    /// Returns the validation, busy, network, or server error that the
    /// submission ran into.
    pub async fn submit(&self, decision: ResolutionDecision) -> Result<(), FlowError> {
        self.begin_submission(&decision)?;
        let conflict_id = decision.conflict_id.clone();
        self.transition(FlowState::Submitting {
            conflict_id: conflict_id.clone(),
        });

        let request = decision.to_request();
        let outcome = match self
            .client
            .resolve_conflict(&self.property_id, &conflict_id, &request)
            .await
        {
            Ok(resp) if resp.success => Ok(()),
            Ok(resp) => Err(FlowError::Server {
                status: 200,
                message: resp
                    .message
                    .unwrap_or_else(|| "resolution rejected".to_string()),
            }),
            Err(e) => Err(FlowError::from(e)),
        };

        match outcome {
            Ok(()) => {
                {
                    let mut inner = self.lock();
                    inner.in_flight.remove(&conflict_id);
                    inner.resolved.insert(conflict_id.clone());
                }
                tracing::debug!(conflict_id, "resolution accepted");
                self.transition(FlowState::Resolved {
                    conflict_id: conflict_id.clone(),
                });
                self.notify_invalidate();
                Ok(())
            }
            Err(error) => {
                self.lock().in_flight.remove(&conflict_id);
                tracing::warn!(conflict_id, %error, "resolution submission failed");
                self.transition(FlowState::SubmitFailed {
                    conflict_id,
                    decision,
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    /// Dismisses a conflict without resolving it, marking it ignored.
    ///
    /// Uses the same submission path (and the same busy/terminal rules)
    /// as [`submit`](Self::submit), with the degenerate ignore action.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`submit`](Self::submit).
    pub async fn dismiss(&self, conflict_id: &str) -> Result<(), FlowError> {
        self.submit(ResolutionDecision::new(conflict_id, ResolutionKind::Ignore))
            .await
    }

    /// Validates a decision and claims the per-conflict in-flight slot,
    /// atomically.
    fn begin_submission(&self, decision: &ResolutionDecision) -> Result<(), FlowError> {
        let mut inner = self.lock();

        let conflict = Self::find(&inner, &decision.conflict_id)?;
        if let ResolutionKind::KeepOne(event_id) = &decision.kind
            && !conflict.involves(event_id)
        {
            return Err(FlowError::Validation(format!(
                "event {event_id} is not part of conflict {}",
                decision.conflict_id
            )));
        }

        if inner.resolved.contains(&decision.conflict_id) {
            return Err(FlowError::Validation(format!(
                "conflict {} is already resolved",
                decision.conflict_id
            )));
        }
        if !inner.in_flight.insert(decision.conflict_id.clone()) {
            return Err(FlowError::Busy {
                conflict_id: decision.conflict_id.clone(),
            });
        }

        Ok(())
    }

    fn find<'a>(inner: &'a Inner, conflict_id: &str) -> Result<&'a Conflict, FlowError> {
        inner
            .conflicts
            .iter()
            .find(|c| c.id == conflict_id)
            .ok_or_else(|| {
                FlowError::Validation(format!(
                    "conflict {conflict_id} is not loaded; load conflicts first"
                ))
            })
    }

    /// Records the new state and notifies observers. The state lock is
    /// released before observers run, so they may query the flow freely.
    fn transition(&self, next: FlowState) {
        self.lock().state = next.clone();

        let observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in observers {
            observer.on_transition(&next);
        }
    }

    fn notify_invalidate(&self) {
        let observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in observers {
            observer.on_invalidate(&self.property_id);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
