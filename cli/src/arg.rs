// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use staycal_api::{ConflictStatus, EventKind, Platform};

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn property() -> Arg {
        arg!(-p --property <PROPERTY> "The property to operate on").required(true)
    }

    pub fn get_property(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("property")
            .expect("property is required")
            .clone()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConflictArgs;

impl ConflictArgs {
    pub fn id() -> Arg {
        arg!(id: <CONFLICT> "The id of the conflict")
    }

    pub fn get_id(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("id")
            .expect("conflict id is required")
            .clone()
    }

    pub fn status() -> Arg {
        arg!(--status <STATUS> "Only show conflicts in this lifecycle state")
            .value_parser(value_parser!(ArgConflictStatus))
    }

    pub fn get_status(matches: &ArgMatches) -> Option<ArgConflictStatus> {
        matches.get_one("status").copied()
    }

    pub fn notes() -> Arg {
        arg!(--notes <NOTES> "Free-text notes recorded with the resolution")
    }

    pub fn get_notes(matches: &ArgMatches) -> Option<String> {
        matches.get_one("notes").cloned()
    }
}

/// Booking platform, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgPlatform {
    Airbnb,
    Vrbo,
    Booking,
    Manual,
}

impl From<ArgPlatform> for Platform {
    fn from(arg: ArgPlatform) -> Self {
        match arg {
            ArgPlatform::Airbnb => Platform::Airbnb,
            ArgPlatform::Vrbo => Platform::Vrbo,
            ArgPlatform::Booking => Platform::Booking,
            ArgPlatform::Manual => Platform::Manual,
        }
    }
}

/// Event kind, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgEventKind {
    Booking,
    Blocked,
    Maintenance,
}

impl From<ArgEventKind> for EventKind {
    fn from(arg: ArgEventKind) -> Self {
        match arg {
            ArgEventKind::Booking => EventKind::Booking,
            ArgEventKind::Blocked => EventKind::Blocked,
            ArgEventKind::Maintenance => EventKind::Maintenance,
        }
    }
}

/// Conflict lifecycle state, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgConflictStatus {
    Active,
    Resolved,
    Ignored,
}

impl From<ArgConflictStatus> for ConflictStatus {
    fn from(arg: ArgConflictStatus) -> Self {
        match arg {
            ArgConflictStatus::Active => ConflictStatus::Active,
            ArgConflictStatus::Resolved => ConflictStatus::Resolved,
            ArgConflictStatus::Ignored => ConflictStatus::Ignored,
        }
    }
}

/// Resolution action, as accepted on the command line.
///
/// `keep-one` additionally requires `--event` naming the event to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgResolution {
    KeepFirst,
    KeepLast,
    KeepOne,
    KeepAll,
    CancelAll,
    Manual,
}
