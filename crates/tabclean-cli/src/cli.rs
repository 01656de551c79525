//! CLI argument definitions for tabclean.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabclean",
    version,
    about = "Clean CSV and Excel tables",
    long_about = "Clean CSV and Excel tables.\n\n\
                  Merges duplicate columns (Score, score, Score.1), trims cells,\n\
                  drops duplicate rows and writes empty cells as Null.\n\
                  The cleaned copy keeps the input format."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
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

    /// Allow cell values in trace logs (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean one or more CSV/Excel files and write cleaned copies.
    Clean(CleanArgs),

    /// Show how column labels resolve to merged columns.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// CSV (.csv) or Excel (.xlsx, .xlsm, .xls) files to clean.
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Folder for cleaned files (default: the folder of each input file).
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Prefix for cleaned file names.
    #[arg(long = "prefix", default_value = tabclean_output::DEFAULT_PREFIX)]
    pub prefix: String,

    /// Worksheet to read from Excel inputs (default: the first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Clean and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Summary output style.
    #[arg(long = "summary", value_enum, default_value = "table")]
    pub summary: SummaryFormatArg,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// CSV or Excel file to inspect.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Worksheet to read from Excel inputs (default: the first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SummaryFormatArg {
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
