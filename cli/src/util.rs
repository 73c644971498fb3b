// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::Timestamp;
use jiff::tz::TimeZone;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// Parses a timestamp from an RFC 3339 string or a bare date.
///
/// Bare dates are taken as midnight UTC, matching how the backend
/// interprets date-only query bounds.
pub fn parse_timestamp(s: &str) -> Result<Timestamp, Box<dyn Error>> {
    if let Ok(ts) = s.parse::<Timestamp>() {
        return Ok(ts);
    }
    if let Ok(date) = s.parse::<jiff::civil::Date>() {
        let zoned = date.at(0, 0, 0, 0).to_zoned(TimeZone::UTC)?;
        return Ok(zoned.timestamp());
    }
    Err(format!("Invalid date format: {s}. Expected YYYY-MM-DD or an RFC 3339 timestamp").into())
}

pub fn format_timestamp(t: Timestamp) -> String {
    t.strftime("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_timestamp_accepts_rfc3339() {
        let ts = parse_timestamp("2025-06-01T14:00:00Z").unwrap();
        assert_eq!(ts.to_string(), "2025-06-01T14:00:00Z");
    }

    #[test]
    fn parse_timestamp_accepts_bare_date_as_midnight_utc() {
        let ts = parse_timestamp("2025-06-01").unwrap();
        assert_eq!(ts, "2025-06-01T00:00:00Z".parse().unwrap());
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("next tuesday").is_err());
        assert!(parse_timestamp("2025-13-01").is_err());
    }

    #[test]
    fn format_timestamp_is_minute_precision() {
        let ts: Timestamp = "2025-06-01T14:30:59Z".parse().unwrap();
        assert_eq!(format_timestamp(ts), "2025-06-01 14:30");
    }
}
