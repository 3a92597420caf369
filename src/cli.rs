// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Command-line interface for the `walk` binary.

use crate::config::BackendKind;
use crate::models::WalkId;
use clap::{Parser, Subcommand, ValueEnum};

/// walk - record and review walks
///
/// Uses the backend selected by WALK_BACKEND (local file storage or the
/// walk API server) unless overridden with --backend.
#[derive(Debug, Parser)]
#[command(name = "walk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Override the configured backend
    #[arg(short, long, global = true, value_enum)]
    pub backend: Option<BackendArg>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Local,
    Remote,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Local => BackendKind::Local,
            BackendArg::Remote => BackendKind::Remote,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a walk
    Save {
        /// Duration in seconds
        #[arg(long, allow_negative_numbers = true)]
        duration: i64,
        /// Distance in kilometres
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,
        /// Step count
        #[arg(long, allow_negative_numbers = true)]
        steps: i64,
    },

    /// List all walks, newest first
    List,

    /// Show the most recent walk
    Recent,

    /// Delete a walk by id
    Delete {
        id: WalkId,
    },

    /// Show current weather
    Weather,
}

impl Cli {
    /// Log filter directive for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "walk_tracker=debug,info",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
        assert_eq!(Cli::command().get_name(), "walk");
    }

    #[test]
    fn test_parse_save() {
        let cli = Cli::parse_from([
            "walk", "save", "--duration", "30", "--distance", "2.5", "--steps", "3000",
        ]);
        match cli.command {
            Command::Save {
                duration,
                distance,
                steps,
            } => {
                assert_eq!(duration, 30);
                assert_eq!(distance, 2.5);
                assert_eq!(steps, 3000);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_save_accepts_negative_values() {
        let cli = Cli::parse_from([
            "walk", "save", "--duration", "-5", "--distance", "-0.5", "--steps", "-20",
        ]);
        assert!(matches!(
            cli.command,
            Command::Save { duration: -5, steps: -20, .. }
        ));
    }

    #[test]
    fn test_parse_delete_with_backend_override() {
        let cli = Cli::parse_from(["walk", "delete", "1700000000000", "--backend", "remote"]);
        assert_eq!(cli.backend, Some(BackendArg::Remote));
        assert!(matches!(
            cli.command,
            Command::Delete { id } if id == WalkId(1_700_000_000_000)
        ));
    }

    #[test]
    fn test_log_filter() {
        let mut cli = Cli::parse_from(["walk", "list"]);
        assert_eq!(cli.log_filter(), "warn");
        cli.verbose = 2;
        assert_eq!(cli.log_filter(), "trace");
        cli.quiet = true;
        assert_eq!(cli.log_filter(), "error");
    }
}
