//! CLI argument definitions for the listings pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "listings",
    version,
    about = "Clean and validate short-term rental listings datasets",
    long_about = "Clean a raw listings dataset into a versioned artifact, or run the \
                  validation suite against a cleaned dataset and a reference."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

    /// Settings file (default: ./listings.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Root directory of the artifact store.
    #[arg(long = "store", value_name = "DIR", global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter a raw dataset and publish the cleaned copy.
    Clean(CleanArgs),

    /// Run the validation suite on a dataset.
    Validate(ValidateArgs),

    /// Print the listing column contract.
    Columns,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// The raw data to be cleaned (`name`, `name:latest` or `name:vN`).
    #[arg(long = "input-artifact", alias = "input_artifact", value_name = "REF")]
    pub input_artifact: String,

    /// Name of the cleaned artifact.
    #[arg(long = "output-artifact", alias = "output_artifact", value_name = "NAME")]
    pub output_artifact: String,

    /// Type tag for the cleaned artifact.
    #[arg(long = "output-type", alias = "output_type", value_name = "TYPE")]
    pub output_type: String,

    /// Description for the cleaned artifact.
    #[arg(long = "output-description", alias = "output_description", value_name = "TEXT")]
    pub output_description: String,

    /// Minimum price to keep (inclusive).
    #[arg(long = "min-price", alias = "min_price", value_name = "PRICE")]
    pub min_price: Option<f64>,

    /// Maximum price to keep (inclusive).
    #[arg(long = "max-price", alias = "max_price", value_name = "PRICE")]
    pub max_price: Option<f64>,

    /// Directory for the cleaned file before it is published (default: current directory).
    #[arg(long = "work-dir", value_name = "DIR")]
    pub work_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Dataset to validate.
    #[arg(long = "csv", value_name = "REF")]
    pub csv: String,

    /// Reference dataset for the distribution check; skipped when absent.
    #[arg(long = "ref", value_name = "REF")]
    pub reference: Option<String>,

    /// Lower price bound (inclusive).
    #[arg(long = "min-price", value_name = "PRICE")]
    pub min_price: Option<f64>,

    /// Upper price bound (inclusive).
    #[arg(long = "max-price", value_name = "PRICE")]
    pub max_price: Option<f64>,

    /// Fail when the KL divergence reaches this value.
    #[arg(long = "kl-threshold", value_name = "BITS")]
    pub kl_threshold: Option<f64>,

    /// Also write the report as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,
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
