// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use staycal_api::{BookingApiClient, EventQuery};
use staycal_core::{Event, EventFilter, detect_overlaps, filter_events};

use crate::arg::{ArgEventKind, ArgPlatform, CommonArgs};
use crate::formatter::{format_events, format_overlaps};
use crate::util::{ArgOutputFormat, parse_timestamp};

#[derive(Debug, Clone)]
pub struct CmdEventList {
    pub property: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub platforms: Vec<ArgPlatform>,
    pub kinds: Vec<ArgEventKind>,
    pub search: Option<String>,
    pub overlaps: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List calendar events for a property")
            .arg(CommonArgs::property())
            .arg(arg!(--from <FROM> "Only show events starting at or after this date"))
            .arg(arg!(--to <TO> "Only show events ending at or before this date"))
            .arg(
                arg!(--platform <PLATFORM> ... "Only show events from this platform")
                    .value_parser(value_parser!(ArgPlatform)),
            )
            .arg(
                arg!(--kind <KIND> ... "Only show events of this kind")
                    .value_parser(value_parser!(ArgEventKind)),
            )
            .arg(arg!(--search <TEXT> "Only show events whose title contains this text"))
            .arg(arg!(--overlaps "Show overlapping event pairs instead of the events"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            property: CommonArgs::get_property(matches),
            from: matches.get_one("from").cloned(),
            to: matches.get_one("to").cloned(),
            platforms: matches
                .get_many("platform")
                .map(|v| v.copied().collect())
                .unwrap_or_default(),
            kinds: matches
                .get_many("kind")
                .map(|v| v.copied().collect())
                .unwrap_or_default(),
            search: matches.get_one("search").cloned(),
            overlaps: matches.get_flag("overlaps"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, client: &BookingApiClient) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");

        let from = self.from.as_deref().map(parse_timestamp).transpose()?;
        let to = self.to.as_deref().map(parse_timestamp).transpose()?;

        let mut query = EventQuery::new();
        if let Some(from) = from {
            query = query.start_date(from);
        }
        if let Some(to) = to {
            query = query.end_date(to);
        }
        for platform in &self.platforms {
            query = query.platform((*platform).into());
        }
        for kind in &self.kinds {
            query = query.event_type((*kind).into());
        }

        let records = client.list_events(&self.property, &query).await?;
        let events = Event::from_records(records)?;

        // The backend already narrowed the result; re-apply the window
        // locally so title search and containment hold regardless of how
        // loosely the server interprets the query.
        let filter = EventFilter {
            search: self.search.clone(),
            platforms: (!self.platforms.is_empty())
                .then(|| self.platforms.iter().map(|p| (*p).into()).collect()),
            kinds: (!self.kinds.is_empty())
                .then(|| self.kinds.iter().map(|k| (*k).into()).collect()),
            from,
            to,
        };
        let events = filter_events(&events, &filter);

        if self.overlaps {
            let pairs = detect_overlaps(&events);
            if pairs.is_empty() && self.output_format == ArgOutputFormat::Table {
                println!("{}", "No overlapping events".italic());
                return Ok(());
            }
            println!("{}", format_overlaps(&pairs, self.output_format)?);
        } else {
            if events.is_empty() && self.output_format == ArgOutputFormat::Table {
                println!("{}", "No events found".italic());
                return Ok(());
            }
            println!("{}", format_events(&events, self.output_format)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    fn parse(args: &[&str]) -> CmdEventList {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdEventList::command());
        let matches = cmd.try_get_matches_from(args).unwrap();
        CmdEventList::from(matches.subcommand_matches("list").unwrap())
    }

    #[test]
    fn parses_all_filters() {
        let parsed = parse(&[
            "test",
            "list",
            "--property",
            "prop-1",
            "--from",
            "2025-06-01",
            "--to",
            "2025-06-30",
            "--platform",
            "airbnb",
            "--platform",
            "vrbo",
            "--kind",
            "booking",
            "--search",
            "getaway",
            "--overlaps",
            "--output-format",
            "json",
        ]);

        assert_eq!(parsed.property, "prop-1");
        assert_eq!(parsed.from.as_deref(), Some("2025-06-01"));
        assert_eq!(parsed.to.as_deref(), Some("2025-06-30"));
        assert_eq!(parsed.platforms, vec![ArgPlatform::Airbnb, ArgPlatform::Vrbo]);
        assert_eq!(parsed.kinds, vec![ArgEventKind::Booking]);
        assert_eq!(parsed.search.as_deref(), Some("getaway"));
        assert!(parsed.overlaps);
        assert_eq!(parsed.output_format, ArgOutputFormat::Json);
    }

    #[test]
    fn property_is_required() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdEventList::command());
        assert!(cmd.try_get_matches_from(["test", "list"]).is_err());
    }
}
