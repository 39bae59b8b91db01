//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads configuration and installs logging
//! - parses CLI arguments
//! - loads report items and buckets them
//! - prints summaries/plots
//! - writes optional exports

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Parser;
use tracing::info;

use crate::calendar::Clock;
use crate::cli::{BucketArgs, Command, LabelArgs, PeriodArgs, PlotArgs};
use crate::config::AppConfig;
use crate::domain::{DatePeriod, GraphConfig, TimeUnit};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `trends` binary.
pub fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    config.logging.init();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    let clock = config.clock();

    match cli.command {
        Command::Bucket(args) => handle_bucket(args, clock.as_ref()),
        Command::Label(args) => handle_label(args, clock.as_ref()),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_bucket(args: BucketArgs, clock: &dyn Clock) -> Result<(), AppError> {
    let config = graph_config_from_args(&args)?;
    let run = pipeline::run_bucket(&config, clock)?;

    println!(
        "{}",
        crate::report::format_run_summary(&config, &run.label, &run.items, &run.series)
    );
    println!(
        "{}",
        crate::report::format_bucket_table(&run.series, &run.names(), config.unit)
    );

    if config.plot {
        println!("{}", crate::plot::render_ascii_bars(&run.series, config.plot_height));
    }

    // Optional exports.
    if let Some(path) = &config.export_results {
        crate::io::export::write_series_csv(path, &run.series, &run.names(), config.unit)?;
        info!(path = %path.display(), "wrote series CSV");
    }
    if let Some(path) = &config.export_series {
        crate::io::series::write_series_json(path, &run.to_series_file(&config))?;
        info!(path = %path.display(), "wrote series JSON");
    }

    Ok(())
}

fn handle_label(args: LabelArgs, clock: &dyn Clock) -> Result<(), AppError> {
    let period = period_from_args(args.unit, &args.period)?;
    println!("{}", period.humanize_with(args.unit, clock));
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::series::read_series_json(&args.series)?;
    println!("{}", crate::plot::render_series_file(&file, args.height));
    Ok(())
}

pub fn graph_config_from_args(args: &BucketArgs) -> Result<GraphConfig, AppError> {
    Ok(GraphConfig {
        input: args.input.clone(),
        scope: args.scope,
        unit: args.unit,
        period: period_from_args(args.unit, &args.period)?,
        plot: args.plot && !args.no_plot,
        plot_height: args.height,
        export_results: args.export.clone(),
        export_series: args.export_series.clone(),
    })
}

/// Resolve `--start/--end` into a period.
///
/// With `--end`, the period runs from midnight of `start` to the last second of `end`.
/// Without it, the calendar week/month/year containing `start` is used.
pub fn period_from_args(unit: TimeUnit, args: &PeriodArgs) -> Result<DatePeriod, AppError> {
    let start = start_of_day(args.start);
    match args.end {
        Some(end) => {
            let end_of_day = end
                .and_hms_opt(23, 59, 59)
                .map(|t| t.and_utc())
                .ok_or_else(|| AppError::invalid_period(format!("Invalid end date {end}.")))?;
            DatePeriod::new(start, end_of_day)
        }
        None => DatePeriod::containing(unit, start),
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Rewrite argv so flags without a subcommand mean `trends bucket`.
///
/// Rules:
/// - `trends -i items.json ...`      -> `trends bucket -i items.json ...`
/// - `trends --help/--version/-h`    -> unchanged (show top-level help/version)
/// - anything else                   -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "bucket".to_string());
    }

    argv
}
