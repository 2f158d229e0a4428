use crate::export::ExportFormat;
use crate::ui::chart::MAX_BAR_WIDTH;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for milklog
/// CLI application to record who finished their milk
#[derive(Parser)]
#[command(
    name = "milklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record who finished their milk, list the log and chart it",
    long_about = None
)]
pub struct Cli {
    /// Override workbook path (useful for tests or a custom workbook)
    #[arg(global = true, long = "workbook")]
    pub workbook: Option<String>,

    /// Override the sheet name inside the workbook
    #[arg(global = true, long = "sheet")]
    pub sheet: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatsBy {
    Name,
    Day,
    Both,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the workbook and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,
    },

    /// Register a name: "I finished my milk!"
    Add {
        /// Name to register (trimmed, max `max_name_chars` characters)
        name: String,

        /// Timestamp to record instead of now (YYYY-MM-DD HH:MM:SS)
        #[arg(long = "at", help = "Timestamp instead of now (YYYY-MM-DD HH:MM:SS)")]
        at: Option<String>,
    },

    /// List everyone who finished their milk
    List {
        #[arg(long = "today", help = "Show only today's records")]
        today: bool,
    },

    /// Delete one record by its position in `list` (admin)
    Del {
        /// Position as shown by `list` (1 = first)
        #[arg(allow_negative_numbers = true)]
        position: i64,

        #[arg(long = "password", help = "Admin password")]
        password: Option<String>,
    },

    /// Delete every record, keeping the header row (admin)
    Clear {
        #[arg(long = "password", help = "Admin password")]
        password: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show bar charts of the log
    Stats {
        #[arg(long = "by", value_enum, default_value = "both")]
        by: StatsBy,

        #[arg(
            long = "width",
            default_value_t = 30,
            value_parser = clap::value_parser!(u16).range(1..=MAX_BAR_WIDTH as i64),
            help = "Length of the longest bar (1-200)"
        )]
        width: u16,
    },

    /// Export the log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the workbook
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Interactive registration desk reading one line per action from stdin
    Kiosk {
        #[arg(long = "password", help = "Start the session as admin")]
        password: Option<String>,
    },
}
