//! Shared "bucket pipeline" logic used by the CLI front-end and library callers.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! trend source -> report items -> bucketing/scaling -> label
//!
//! Front-ends can then focus on presentation (printing vs exports).

use crate::calendar::Clock;
use crate::domain::{BucketedSeries, GraphConfig, ReportItem, SeriesFile};
use crate::error::AppError;
use crate::graph::build_graph_data;
use crate::io::source::{FileTrendSource, TrendSource};

/// All computed outputs of a single `trends bucket` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub items: Vec<ReportItem>,
    pub series: BucketedSeries,
    pub label: String,
}

impl RunOutput {
    /// Report item names, aligned with each bucket's values.
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }

    pub fn to_series_file(&self, config: &GraphConfig) -> SeriesFile {
        SeriesFile {
            tool: "trends".to_string(),
            scope: config.scope,
            unit: config.unit,
            period: config.period,
            label: self.label.clone(),
            names: self.names(),
            series: self.series.clone(),
        }
    }
}

/// Execute the bucketing pipeline against the configured input file.
pub fn run_bucket(config: &GraphConfig, clock: &dyn Clock) -> Result<RunOutput, AppError> {
    let source = FileTrendSource::new(config.input.clone());
    run_bucket_with_source(config, &source, clock)
}

/// Execute the bucketing pipeline with any trend source.
pub fn run_bucket_with_source(
    config: &GraphConfig,
    source: &dyn TrendSource,
    clock: &dyn Clock,
) -> Result<RunOutput, AppError> {
    let items = source.report_items(config.scope, config.unit, &config.period)?;
    let series = build_graph_data(&items, config.unit, &config.period);
    let label = config.period.humanize_with(config.unit, clock);

    Ok(RunOutput { items, series, label })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::FixedClock;
    use crate::domain::{DatePeriod, Scope, TimeUnit};
    use crate::io::source::StaticTrendSource;
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    fn config(unit: TimeUnit, period: DatePeriod) -> GraphConfig {
        GraphConfig {
            input: PathBuf::from("unused.json"),
            scope: Scope::Neighborhood,
            unit,
            period,
            plot: false,
            plot_height: 5,
            export_results: None,
            export_series: None,
        }
    }

    #[test]
    fn runs_against_static_source() {
        let period = DatePeriod::containing(
            TimeUnit::Month,
            Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
        )
        .unwrap();
        let source = StaticTrendSource::new(vec![
            ReportItem::new("symptoms").with_point("2023-06-15", 400.0),
            ReportItem::new("behaviors").with_point("2023-06-15", 4.0),
        ]);
        let clock = FixedClock::at_year(2024).unwrap();

        let run = run_bucket_with_source(&config(TimeUnit::Month, period), &source, &clock).unwrap();
        assert_eq!(run.label, "June 2023");
        assert_eq!(run.series.len(), 30);
        assert_eq!(run.series.base, 10);
        assert_eq!(
            run.series.get(Utc.with_ymd_and_hms(2023, 6, 15, 0, 0, 0).unwrap()),
            Some(&[40.0, 0.0][..])
        );

        let file = run.to_series_file(&config(TimeUnit::Month, period));
        assert_eq!(file.names, vec!["symptoms", "behaviors"]);
        assert_eq!(file.scope, Scope::Neighborhood);
    }

    #[test]
    fn reads_items_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, r#"[{"name":"mood","distribution":{"2024-06-04":3}}]"#).unwrap();

        let period = DatePeriod::containing(
            TimeUnit::Week,
            Utc.with_ymd_and_hms(2024, 6, 4, 0, 0, 0).unwrap(),
        )
        .unwrap();
        let mut cfg = config(TimeUnit::Week, period);
        cfg.input = path;

        let run = run_bucket(&cfg, &FixedClock::at_year(2024).unwrap()).unwrap();
        assert_eq!(run.label, "Jun 3-9");
        assert_eq!(run.series.totals(), vec![0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }
}
