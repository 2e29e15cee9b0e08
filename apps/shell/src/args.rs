//! # CLI Argument Definitions

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "podium")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Conference session scheduling toolkit")]
pub(crate) struct Cli {
    /// Config file (TOML, JSON or YAML); `PODIUM__*` environment variables override it
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Check a candidate session against a day's sessions
    Check {
        /// JSON file with `persons`, `sessions` and `candidate`
        #[arg(short, long)]
        snapshot: PathBuf,
        /// Ignore the stored version of the candidate (same id) when editing
        #[arg(long)]
        exclude_self: bool,
        /// Also report presenters chairing an overlapping session and vice versa
        #[arg(long)]
        cross_role: bool,
    },
    /// Generate conference days for a date range
    Days {
        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,
        /// Last day (inclusive), YYYY-MM-DD
        #[arg(long)]
        end: NaiveDate,
    },
    /// Print sessions ordered by start time
    Order {
        /// JSON file holding an array of sessions
        #[arg(short, long)]
        sessions: PathBuf,
        /// One line per session instead of JSON
        #[arg(long)]
        plain: bool,
    },
}
