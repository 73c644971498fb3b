// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use staycal_api::BookingApiClient;
use staycal_core::{ConflictResolutionFlow, ResolutionDecision, ResolutionKind};

use crate::arg::{ArgConflictStatus, ArgResolution, CommonArgs, ConflictArgs};
use crate::formatter::format_conflicts;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone)]
pub struct CmdConflictList {
    pub property: String,
    pub status: Option<ArgConflictStatus>,
    pub output_format: ArgOutputFormat,
}

impl CmdConflictList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List booking conflicts for a property")
            .arg(CommonArgs::property())
            .arg(ConflictArgs::status())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            property: CommonArgs::get_property(matches),
            status: ConflictArgs::get_status(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, client: &BookingApiClient) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing conflicts...");
        let flow = ConflictResolutionFlow::new(client.clone(), &self.property);
        let conflicts = flow.load_conflicts(self.status.map(Into::into)).await?;

        if conflicts.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("{}", "No conflicts found".italic());
            return Ok(());
        }
        println!("{}", format_conflicts(&conflicts, self.output_format)?);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdConflictOptions {
    pub property: String,
    pub conflict_id: String,
}

impl CmdConflictOptions {
    pub const NAME: &str = "options";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the resolution menu for a conflict")
            .arg(CommonArgs::property())
            .arg(ConflictArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            property: CommonArgs::get_property(matches),
            conflict_id: ConflictArgs::get_id(matches),
        }
    }

    pub async fn run(self, client: &BookingApiClient) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "building resolution menu...");
        let flow = ConflictResolutionFlow::new(client.clone(), &self.property);
        flow.load_conflicts(None).await?;

        for (i, option) in flow.resolution_options(&self.conflict_id)?.iter().enumerate() {
            println!("{:>2}. {}", i + 1, option.label);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdConflictResolve {
    pub property: String,
    pub conflict_id: String,
    pub action: ArgResolution,
    pub event: Option<String>,
    pub notes: Option<String>,
}

impl CmdConflictResolve {
    pub const NAME: &str = "resolve";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Resolve a booking conflict")
            .arg(CommonArgs::property())
            .arg(ConflictArgs::id())
            .arg(
                arg!(action: <ACTION> "How to resolve the conflict")
                    .value_parser(value_parser!(ArgResolution)),
            )
            .arg(arg!(--event <EVENT> "The event to keep (required for keep-one)"))
            .arg(ConflictArgs::notes())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            property: CommonArgs::get_property(matches),
            conflict_id: ConflictArgs::get_id(matches),
            action: *matches
                .get_one::<ArgResolution>("action")
                .expect("action is required"),
            event: matches.get_one("event").cloned(),
            notes: ConflictArgs::get_notes(matches),
        }
    }

    fn kind(&self) -> Result<ResolutionKind, Box<dyn Error>> {
        Ok(match self.action {
            ArgResolution::KeepFirst => ResolutionKind::KeepFirst,
            ArgResolution::KeepLast => ResolutionKind::KeepLast,
            ArgResolution::KeepOne => match &self.event {
                Some(event) => ResolutionKind::KeepOne(event.clone()),
                None => return Err("keep-one requires --event <EVENT>".into()),
            },
            ArgResolution::KeepAll => ResolutionKind::KeepAll,
            ArgResolution::CancelAll => ResolutionKind::CancelAll,
            ArgResolution::Manual => ResolutionKind::Manual,
        })
    }

    pub async fn run(self, client: &BookingApiClient) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "resolving conflict...");
        let kind = self.kind()?;

        let flow = ConflictResolutionFlow::new(client.clone(), &self.property);
        flow.load_conflicts(None).await?;

        let mut decision = ResolutionDecision::new(&self.conflict_id, kind);
        decision.notes = self.notes;
        flow.submit(decision).await?;

        println!(
            "{} conflict {} resolved; refetch the property's calendar to see the outcome",
            "Done:".green(),
            self.conflict_id
        );
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdConflictDismiss {
    pub property: String,
    pub conflict_id: String,
}

impl CmdConflictDismiss {
    pub const NAME: &str = "dismiss";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Dismiss a conflict without resolving it")
            .arg(CommonArgs::property())
            .arg(ConflictArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            property: CommonArgs::get_property(matches),
            conflict_id: ConflictArgs::get_id(matches),
        }
    }

    pub async fn run(self, client: &BookingApiClient) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "dismissing conflict...");
        let flow = ConflictResolutionFlow::new(client.clone(), &self.property);
        flow.load_conflicts(None).await?;
        flow.dismiss(&self.conflict_id).await?;

        println!("{} conflict {} dismissed", "Done:".green(), self.conflict_id);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdConflictDelete {
    pub property: String,
    pub conflict_id: String,
    pub preserve_history: bool,
}

impl CmdConflictDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Remove a conflict record entirely")
            .arg(CommonArgs::property())
            .arg(ConflictArgs::id())
            .arg(arg!(--"preserve-history" "Archive the conflict instead of deleting it"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            property: CommonArgs::get_property(matches),
            conflict_id: ConflictArgs::get_id(matches),
            preserve_history: matches.get_flag("preserve-history"),
        }
    }

    pub async fn run(self, client: &BookingApiClient) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting conflict...");
        client
            .delete_conflict(&self.property, &self.conflict_id, self.preserve_history)
            .await?;

        println!("{} conflict {} deleted", "Done:".green(), self.conflict_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    #[test]
    fn parse_resolve_keep_one() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdConflictResolve::command());
        let matches = cmd
            .try_get_matches_from([
                "test",
                "resolve",
                "--property",
                "prop-1",
                "cfl-1",
                "keep-one",
                "--event",
                "evt-2",
                "--notes",
                "guest rebooked",
            ])
            .unwrap();

        let parsed = CmdConflictResolve::from(matches.subcommand_matches("resolve").unwrap());
        assert_eq!(parsed.conflict_id, "cfl-1");
        assert_eq!(parsed.action, ArgResolution::KeepOne);
        assert_eq!(parsed.event.as_deref(), Some("evt-2"));
        assert_eq!(
            parsed.kind().unwrap(),
            ResolutionKind::KeepOne("evt-2".to_string())
        );
    }

    #[test]
    fn resolve_keep_one_without_event_is_an_error() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdConflictResolve::command());
        let matches = cmd
            .try_get_matches_from([
                "test", "resolve", "--property", "prop-1", "cfl-1", "keep-one",
            ])
            .unwrap();

        let parsed = CmdConflictResolve::from(matches.subcommand_matches("resolve").unwrap());
        assert!(parsed.kind().is_err());
    }

    #[test]
    fn parse_delete_preserve_history() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdConflictDelete::command());
        let matches = cmd
            .try_get_matches_from([
                "test",
                "delete",
                "--property",
                "prop-1",
                "cfl-1",
                "--preserve-history",
            ])
            .unwrap();

        let parsed = CmdConflictDelete::from(matches.subcommand_matches("delete").unwrap());
        assert!(parsed.preserve_history);
    }

    #[test]
    fn parse_list_with_status() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdConflictList::command());
        let matches = cmd
            .try_get_matches_from([
                "test", "list", "--property", "prop-1", "--status", "active",
            ])
            .unwrap();

        let parsed = CmdConflictList::from(matches.subcommand_matches("list").unwrap());
        assert_eq!(parsed.status, Some(ArgConflictStatus::Active));
    }
}
