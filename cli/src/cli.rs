// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use staycal_api::BookingApiClient;

use crate::cmd_availability::CmdAvailability;
use crate::cmd_conflict::{
    CmdConflictDelete, CmdConflictDismiss, CmdConflictList, CmdConflictOptions, CmdConflictResolve,
};
use crate::cmd_event::CmdEventList;
use crate::config::parse_config;

const APP_NAME: &str = "staycal";

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Detect and resolve booking conflicts across rental platforms.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/staycal/config.toml on Linux, \
~/Library/Application Support/staycal/config.toml on MacOS, and \
%APPDATA%/staycal/config.toml on Windows. The STAYCAL_CONFIG environment variable \
overrides the default location.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Inspect property calendars")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventList::command()),
            )
            .subcommand(
                Command::new("conflict")
                    .alias("c")
                    .about("Manage booking conflicts")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdConflictList::command())
                    .subcommand(CmdConflictOptions::command())
                    .subcommand(CmdConflictResolve::command())
                    .subcommand(CmdConflictDismiss::command())
                    .subcommand(CmdConflictDelete::command()),
            )
            .subcommand(CmdAvailability::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
                _ => unreachable!(),
            },
            Some(("conflict", matches)) => match matches.subcommand() {
                Some((CmdConflictList::NAME, matches)) => {
                    ConflictList(CmdConflictList::from(matches))
                }
                Some((CmdConflictOptions::NAME, matches)) => {
                    ConflictOptions(CmdConflictOptions::from(matches))
                }
                Some((CmdConflictResolve::NAME, matches)) => {
                    ConflictResolve(CmdConflictResolve::from(matches))
                }
                Some((CmdConflictDismiss::NAME, matches)) => {
                    ConflictDismiss(CmdConflictDismiss::from(matches))
                }
                Some((CmdConflictDelete::NAME, matches)) => {
                    ConflictDelete(CmdConflictDelete::from(matches))
                }
                _ => unreachable!(),
            },
            Some((CmdAvailability::NAME, matches)) => Availability(CmdAvailability::from(matches)),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List calendar events
    EventList(CmdEventList),

    /// List conflicts
    ConflictList(CmdConflictList),

    /// Show the resolution menu for a conflict
    ConflictOptions(CmdConflictOptions),

    /// Resolve a conflict
    ConflictResolve(CmdConflictResolve),

    /// Dismiss a conflict
    ConflictDismiss(CmdConflictDismiss),

    /// Delete a conflict record
    ConflictDelete(CmdConflictDelete),

    /// Check availability for a window
    Availability(CmdAvailability),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        let client = Self::client(config).await?;
        match self {
            EventList(a) => a.run(&client).await,
            ConflictList(a) => a.run(&client).await,
            ConflictOptions(a) => a.run(&client).await,
            ConflictResolve(a) => a.run(&client).await,
            ConflictDismiss(a) => a.run(&client).await,
            ConflictDelete(a) => a.run(&client).await,
            Availability(a) => a.run(&client).await,
        }
    }

    async fn client(config: Option<PathBuf>) -> Result<BookingApiClient, Box<dyn Error>> {
        tracing::debug!("Parsing configuration...");
        let (api, session) = parse_config(config).await?;
        Ok(BookingApiClient::new(api, session)?)
    }
}
