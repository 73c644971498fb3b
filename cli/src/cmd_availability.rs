// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use staycal_api::BookingApiClient;

use crate::arg::CommonArgs;
use crate::util::parse_timestamp;

#[derive(Debug, Clone)]
pub struct CmdAvailability {
    pub property: String,
    pub from: String,
    pub to: String,
}

impl CmdAvailability {
    pub const NAME: &str = "availability";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check whether a property is free for a time window")
            .arg(CommonArgs::property())
            .arg(arg!(from: <FROM> "Start of the window"))
            .arg(arg!(to: <TO> "End of the window"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            property: CommonArgs::get_property(matches),
            from: matches
                .get_one::<String>("from")
                .expect("from is required")
                .clone(),
            to: matches
                .get_one::<String>("to")
                .expect("to is required")
                .clone(),
        }
    }

    pub async fn run(self, client: &BookingApiClient) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking availability...");
        let start = parse_timestamp(&self.from)?;
        let end = parse_timestamp(&self.to)?;
        if end <= start {
            return Err("the window's end must be after its start".into());
        }

        let resp = client.check_availability(&self.property, start, end).await?;
        if resp.is_available {
            println!("{} {} is free for the window", "Available:".green(), self.property);
        } else {
            println!(
                "{} {} is booked for the window",
                "Unavailable:".red(),
                self.property
            );
            if let Some(events) = resp.conflicting_events
                && !events.is_empty()
            {
                let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
                println!("Conflicting events: {}", ids.join(", "));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    #[test]
    fn parse_window() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdAvailability::command());
        let matches = cmd
            .try_get_matches_from([
                "test",
                "availability",
                "--property",
                "prop-1",
                "2025-06-01",
                "2025-06-05",
            ])
            .unwrap();

        let parsed = CmdAvailability::from(matches.subcommand_matches("availability").unwrap());
        assert_eq!(parsed.property, "prop-1");
        assert_eq!(parsed.from, "2025-06-01");
        assert_eq!(parsed.to, "2025-06-05");
    }
}
