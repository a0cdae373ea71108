//! CLI argument definitions for the census board.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use census_model::{Column, ReportVariant, SortKey};

#[derive(Parser)]
#[command(
    name = "census",
    version,
    about = "Census board - parse pasted census lines and sort them",
    long_about = "Parse pasted hospital census lines into records and list them\n\
                  under a multi-column sort order.\n\n\
                  Rows whose length of stay falls between 1.0 and 3.3 days are highlighted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient names and numbers to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Config file (default: census.toml in the platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse census text and print the sorted records.
    Arrange(ArrangeArgs),

    /// Show how each extraction rule reads a single line.
    Explain(ExplainArgs),

    /// List the supported report variants.
    Variants,
}

#[derive(Args)]
pub struct ArrangeArgs {
    /// Census text file; reads stdin when omitted or "-".
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub variant: VariantArg,

    /// Sort key, repeatable; prefix with '-' for descending (replaces defaults).
    #[arg(long = "sort", value_name = "COLUMN", allow_hyphen_values = true)]
    pub sort: Vec<SortKey>,

    /// Toggle a column, repeatable; applied in order after --sort.
    ///
    /// A column already in the sort list flips direction in place; a new
    /// column becomes the ascending primary key.
    #[arg(long = "toggle", value_name = "COLUMN")]
    pub toggle: Vec<Column>,

    /// List records with a length of stay below this many days first.
    #[arg(long = "partition-below", value_name = "DAYS")]
    pub partition_below: Option<f64>,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Args)]
pub struct ExplainArgs {
    /// The census line to inspect.
    #[arg(value_name = "LINE")]
    pub line: String,

    #[command(flatten)]
    pub variant: VariantArg,
}

#[derive(Args)]
pub struct VariantArg {
    /// Report variant (overrides the config file).
    #[arg(long = "variant", value_name = "VARIANT")]
    pub variant: Option<ReportVariant>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
