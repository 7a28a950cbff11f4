//! CLI argument definitions for the data profiler.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dataprof",
    version,
    about = "Profile CSV files into xlsx reports",
    long_about = "Profile a CSV file, or every .csv file directly inside a directory.\n\n\
                  Each input gets analysis/analysis_<name>_v2.xlsx next to it with summary \
                  statistics, value distributions, correlation, covariance and row samples."
)]
pub struct Cli {
    /// CSV file or directory of CSV files to profile.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Predictor (target) variable name. Recorded in the logs only.
    #[arg(value_name = "PREDICTOR")]
    pub predictor: Option<String>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
