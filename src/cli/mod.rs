use crate::constants::{APP_DESCRIPTION, APP_NAME, DEFAULT_EXPORT_FILENAME};
use crate::entry::{DateKey, Score};
use crate::errors::AppResult;
use crate::logging::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A daily check-in tracker for mood scores and streaks
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log record format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record a mood score (0 = best, 10 = worst) for a day
    Checkin {
        /// Mood score from 0 to 10
        #[arg(allow_negative_numbers = true)]
        score: Score,

        /// Day to check in (format: YYYY-MM-DD or YYYYMMDD), defaults to today
        #[arg(short = 'd', long)]
        date: Option<String>,
    },

    /// Remove the check-in for a day
    Remove {
        /// Day to remove (format: YYYY-MM-DD or YYYYMMDD)
        date: String,
    },

    /// Remove every check-in
    Clear {
        /// Confirm that all check-ins should be deleted
        #[arg(long)]
        yes: bool,
    },

    /// Show whether today is checked in and the current and best streaks
    Status,

    /// Show the mood details recorded for a day
    Show {
        /// Day to show (format: YYYY-MM-DD or YYYYMMDD)
        date: String,
    },

    /// Print calendar display events as JSON
    Events,

    /// Write all check-ins as a JSON document
    Export {
        /// Output file (checkins.json when given without a value); prints to stdout when omitted
        #[arg(short = 'o', long, num_args = 0..=1, default_missing_value = DEFAULT_EXPORT_FILENAME)]
        output: Option<PathBuf>,
    },

    /// Replace all check-ins with the contents of a JSON document
    Import {
        /// File holding a date → score object or a legacy list of dates
        file: PathBuf,
    },

    /// List the selectable mood levels
    Scale,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        <CliArgs as Parser>::parse()
    }
}

/// Resolves an optional date argument, defaulting to `today`.
pub fn resolve_date(date: Option<&str>, today: DateKey) -> AppResult<DateKey> {
    match date {
        Some(date_str) => DateKey::parse_user_input(date_str),
        None => Ok(today),
    }
}
