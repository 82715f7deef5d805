use crate::export::ExportFormat;
use crate::models::punch_kind::PunchKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for crewclock
#[derive(Parser)]
#[command(
    name = "crewclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Crew attendance: record site punches and total worked hours with SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use for --edit")]
        editor: Option<String>,
    },

    /// Record a punch for a worker
    Punch {
        /// Worker identifier
        worker: String,

        /// Punch kind
        #[arg(value_enum)]
        kind: PunchKind,

        #[arg(
            long = "at",
            value_name = "YYYY-MM-DD HH:MM",
            help = "Instant of the punch (default: now)"
        )]
        at: Option<String>,

        #[arg(long = "site", help = "Worksite where the punch happened")]
        site: Option<String>,
    },

    /// Correct the time of an existing punch (marks it as edited)
    Amend {
        worker: String,

        /// Date of the punch (YYYY-MM-DD)
        date: String,

        #[arg(value_enum)]
        kind: PunchKind,

        /// Corrected time (HH:MM or HH:MM:SS)
        time: String,
    },

    /// Delete the latest punch of a worker's day
    Del {
        worker: String,

        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Register an approved leave interval
    Leave {
        worker: String,

        /// First day of leave (YYYY-MM-DD)
        start: String,

        /// Last day of leave, inclusive (YYYY-MM-DD)
        end: String,

        /// Hours credited for the whole interval
        hours: f64,
    },

    /// Show a worker's attendance state and the punches allowed next
    Status {
        worker: String,

        #[arg(long = "date", help = "Day to inspect (default: today)")]
        date: Option<String>,
    },

    /// Worked hours per day, per worker and for the whole crew
    Report {
        #[arg(
            long,
            short,
            help = "Year/month/day or a range (YYYY, YYYY-MM, YYYY-MM-DD, start:end); default current month"
        )]
        period: Option<String>,

        #[arg(long = "worker", short = 'w', help = "Restrict to one worker")]
        worker: Option<String>,

        #[arg(long = "live", help = "Count today's open day up to now")]
        live: bool,

        #[arg(long = "details", help = "Show one row per worked day")]
        details: bool,
    },

    /// Export an aggregated report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Year/month/day or a range; default current month"
        )]
        range: Option<String>,

        #[arg(long = "worker", short = 'w')]
        worker: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
