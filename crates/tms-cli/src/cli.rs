//! CLI argument definitions for `tms`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tms",
    version,
    about = "Treasury file toolkit - parse, validate and convert upload files",
    long_about = "Parse CSV/XLSX/XLS upload files, normalize dates to YYYY-MM-DD,\n\
                  validate rows against a declarative schema, and re-serialize\n\
                  edited data as canonical CSV."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse files and validate them against a schema.
    Check(CheckArgs),

    /// Parse a file and re-serialize it as normalized CSV.
    Convert(ConvertArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Files to check (.csv, .xlsx or .xls).
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Path to a JSON validation schema
    /// ({"requiredHeaders": [...], "requiredFields": [...], "numericFields": [...]}).
    #[arg(long = "schema", value_name = "JSON")]
    pub schema: PathBuf,

    /// Emit machine-readable JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Input file (.csv, .xlsx or .xls).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path (stdout when omitted).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// CSV quoting style.
    ///
    /// "quoted" wraps every cell in double quotes with LF line endings;
    /// "minimal" quotes only when needed and uses CRLF, for backends that
    /// expect the legacy wire shape.
    #[arg(long = "style", value_enum, default_value = "quoted")]
    pub style: CsvStyleArg,
}

/// CLI CSV style choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum CsvStyleArg {
    Quoted,
    Minimal,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
