use crate::export::ExportFormat;
use crate::ui::labels::Language;
use clap::{Parser, Subcommand};

/// Command-line interface definition for prodlog
/// CLI application to record production output with SQLite
#[derive(Parser)]
#[command(
    name = "prodlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple production logging CLI: record output per model, color and shift, chart daily totals and export reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Display language (overrides the configured one)
    #[arg(global = true, long = "lang", value_enum)]
    pub lang: Option<Language>,

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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a production record
    Add {
        /// Production date (YYYY-MM-DD)
        date: String,

        /// Bag model
        model: String,

        /// Color
        color: String,

        /// Produced quantity (non-negative integer, 0 allowed)
        #[arg(allow_hyphen_values = true)]
        total: String,

        /// Shift: day (Siang) or night (Malam)
        #[arg(long, short, default_value = "day")]
        shift: String,
    },

    /// Delete a record by ID
    Del {
        /// Record id, as shown by `list`
        id: i64,
    },

    /// Show records, grand total and the daily chart
    List {
        /// Only records of this date (YYYY-MM-DD)
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Export records to production_report.<format>
    Export {
        /// Only records of this date (YYYY-MM-DD)
        #[arg(long, short)]
        date: Option<String>,

        /// Destination directory (default: `export_dir` from config)
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Xlsx)]
        format: ExportFormat,

        /// Omit the title and period rows of the spreadsheet
        #[arg(long = "no-header-rows")]
        no_header_rows: bool,
    },
}
