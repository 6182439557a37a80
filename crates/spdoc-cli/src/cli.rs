//! CLI argument definitions for spdoc.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "spdoc",
    version,
    about = "Stored procedure documentation - search, filter and render the catalog",
    long_about = "Browse the stored-procedure documentation catalog.\n\n\
                  Procedures can be searched by name, description and parameters,\n\
                  filtered by statement type, and rendered as tables, JSON or HTML."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Load the catalog from a TOML file instead of the built-in one.
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Settings file (default: platform config dir, settings.toml).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// How search and type filter combine (overrides the settings file).
    #[arg(long = "compose", value_enum, global = true)]
    pub compose: Option<ComposeArg>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// List procedures, optionally searched and filtered.
    List(ListArgs),

    /// Show one procedure with its details.
    Show(ShowArgs),

    /// List report cards.
    Reports(ReportsArgs),

    /// Write the catalog view as an HTML fragment.
    Html(HtmlArgs),

    /// Interactive session: type to search, click with commands.
    Browse,

    /// Print the effective settings.
    Config,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Free-text search over name, description and parameters.
    #[arg(long = "search", short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    /// Statement type filter.
    #[arg(long = "type", short = 't', value_enum)]
    pub kind: Option<TypeArg>,

    /// Expand the details of one procedure in the result.
    #[arg(long = "expand", value_name = "NAME")]
    pub expand: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Procedure name, e.g. SP_Report_StudentGrades.
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Parser)]
pub struct ReportsArgs {
    /// Free-text search over title, description and file name.
    #[arg(long = "search", short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    /// Open the details panel of the report at this index.
    #[arg(long = "open", value_name = "INDEX")]
    pub open: Option<usize>,
}

#[derive(Parser)]
pub struct HtmlArgs {
    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[arg(long = "search", short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    #[arg(long = "type", short = 't', value_enum)]
    pub kind: Option<TypeArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TypeArg {
    All,
    Select,
    Insert,
    Update,
    Delete,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ComposeArg {
    Override,
    Intersect,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Html,
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
