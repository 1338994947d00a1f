use clap::{Parser, Subcommand};

/// Command-line interface definition for workledger
#[derive(Parser)]
#[command(
    name = "workledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track monthly work hours, pauses, vacation and time off; export CSV reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a separate ledger)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the database
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or inspect the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Show the week grid, weekly breakdown and month summary
    Show {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,

        #[arg(long = "details", help = "List pauses for each day")]
        details: bool,
    },

    /// Set start, end or time off for a day (an empty value clears the field)
    Set {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "start", help = "Work start (H:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "Work end (H:MM)")]
        end: Option<String>,

        #[arg(long = "time-off", help = "Time off in hours")]
        time_off: Option<String>,
    },

    /// Add, edit or remove pauses for a day
    Pause {
        #[command(subcommand)]
        action: PauseAction,
    },

    /// Toggle a full day off (vacation) for a day
    Vacation {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Export a month as a CSV report
    Export {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to export (default: current)")]
        month: Option<String>,

        #[arg(long, value_name = "DIR", help = "Output directory (default: export_dir from config)")]
        dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing report")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum PauseAction {
    /// Append a pause (both sides optional)
    Add {
        date: String,
        #[arg(long = "start")]
        start: Option<String>,
        #[arg(long = "end")]
        end: Option<String>,
    },

    /// Edit pause number N (1-based)
    Set {
        date: String,
        index: usize,
        #[arg(long = "start")]
        start: Option<String>,
        #[arg(long = "end")]
        end: Option<String>,
    },

    /// Remove pause number N (1-based)
    Del { date: String, index: usize },
}
