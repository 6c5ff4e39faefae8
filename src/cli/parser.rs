use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for shiftmetrics
/// CLI application to summarize operator productivity by shift
#[derive(Parser)]
#[command(
    name = "shiftmetrics",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarize operator disassembly productivity by shift, day and operator against a KPI target",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom schedules)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter arguments shared by every data subcommand.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Keep only these operators (comma-separated, markers ignored)
    #[arg(long = "operators", value_name = "A,B,...")]
    pub operators: Option<String>,

    /// Keep only these shifts (comma-separated shift names)
    #[arg(long = "shifts", value_name = "AM,Night,...")]
    pub shifts: Option<String>,

    /// First calendar date to keep (YYYY-MM-DD, inclusive)
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<String>,

    /// Last calendar date to keep (YYYY-MM-DD, inclusive)
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<String>,

    /// Time-of-day window (HH:MM-HH:MM, may wrap past midnight)
    #[arg(long = "between", value_name = "WINDOW")]
    pub between: Option<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file with the default schedule
    Init,

    /// Manage the configuration file (view or validate)
    Config {
        #[arg(long = "print", help = "Print the active configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate schedule and thresholds")]
        check: bool,
    },

    /// Print classified records (shift and shift day per session)
    Classify {
        /// Raw CSV file to read
        file: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Aggregate sessions and annotate throughput against the KPI target
    Report {
        /// Raw CSV file to read
        file: String,

        /// Grouping dimensions, e.g. "operator" or "day,shift,operator"
        #[arg(long = "group-by", value_name = "DIMS", default_value = "operator")]
        group_by: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Override the configured KPI target (items per hour)
        #[arg(long = "target", value_name = "N")]
        target: Option<f64>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Top-performing operator per shift day (shifts combined)
    Top {
        /// Raw CSV file to read
        file: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Low-utilization flags per (shift day, operator)
    Flags {
        /// Raw CSV file to read
        file: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Override the configured low-utilization threshold
        #[arg(long = "threshold", value_name = "N")]
        threshold: Option<u64>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}
