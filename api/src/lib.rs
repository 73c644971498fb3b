// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the booking backend (properties, calendar events,
//! conflicts, availability).

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

mod client;
mod config;
mod error;
mod http;
mod query;
mod session;
mod types;

pub use crate::client::BookingApiClient;
pub use crate::config::{ApiConfig, AuthMethod};
pub use crate::error::ApiError;
pub use crate::query::EventQuery;
pub use crate::session::Session;
pub use crate::types::{
    AvailabilityResponse, ConflictKind, ConflictRecord, ConflictStatus, EventKind, EventRecord,
    EventStatus, Platform, ResolutionAction, ResolutionRequest, ResolveResponse, Severity,
};
