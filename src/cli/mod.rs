//! Command-line parsing for the trend bucketing tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the bucketing code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::{Scope, TimeUnit};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "trends", version, about = "Bucket and scale trend report items for charting")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Bucket report items over a period, print the series, and optionally plot/export.
    Bucket(BucketArgs),
    /// Print the chart title for a period.
    Label(LabelArgs),
    /// Plot a previously exported series JSON.
    Plot(PlotArgs),
}

/// Options for bucketing report items.
#[derive(Debug, Parser, Clone)]
pub struct BucketArgs {
    /// Report items file (JSON array / envelope, or CSV with name,date,value).
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: PathBuf,

    /// Reporting granularity.
    #[arg(short = 'u', long, value_enum, default_value_t = TimeUnit::Week)]
    pub unit: TimeUnit,

    /// Whose trend the items describe.
    #[arg(long, value_enum, default_value_t = Scope::Individual)]
    pub scope: Scope,

    #[command(flatten)]
    pub period: PeriodArgs,

    /// Render an ASCII bar preview in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal preview.
    #[arg(long)]
    pub no_plot: bool,

    /// Preview height (rows).
    #[arg(long, default_value_t = 10)]
    pub height: usize,

    /// Export per-bucket values to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the series (metadata + buckets) to JSON.
    #[arg(long = "export-series")]
    pub export_series: Option<PathBuf>,
}

/// Period selection shared by `bucket` and `label`.
#[derive(Debug, Parser, Clone)]
pub struct PeriodArgs {
    /// First day of the period (YYYY-MM-DD).
    #[arg(short = 's', long)]
    pub start: NaiveDate,

    /// Last day of the period (YYYY-MM-DD).
    ///
    /// When omitted, the whole week/month/year containing `--start` is used.
    #[arg(short = 'e', long)]
    pub end: Option<NaiveDate>,
}

/// Options for printing a period label.
#[derive(Debug, Parser)]
pub struct LabelArgs {
    #[arg(short = 'u', long, value_enum, default_value_t = TimeUnit::Week)]
    pub unit: TimeUnit,

    #[command(flatten)]
    pub period: PeriodArgs,
}

/// Options for plotting a saved series.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Series JSON file produced by `trends bucket --export-series`.
    #[arg(long, value_name = "JSON")]
    pub series: PathBuf,

    /// Preview height (rows).
    #[arg(long, default_value_t = 10)]
    pub height: usize,
}
