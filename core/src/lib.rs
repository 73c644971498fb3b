// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Booking conflict core: event filtering, interval-overlap detection,
//! and the conflict resolution workflow.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::similar_names,
    clippy::single_match_else,
    clippy::missing_errors_doc
)]

mod conflict;
mod error;
mod event;
mod flow;
mod overlap;

pub use crate::conflict::{
    Conflict, ResolutionDecision, ResolutionKind, ResolutionOption, resolution_options,
};
pub use crate::error::FlowError;
pub use crate::event::{ColorKey, Event, color_for_event};
pub use crate::flow::{ConflictResolutionFlow, FlowObserver, FlowState};
pub use crate::overlap::{EventFilter, OverlapPair, detect_overlaps, filter_events};

pub use staycal_api::{
    ConflictKind, ConflictStatus, EventKind, EventStatus, Platform, Severity,
};
