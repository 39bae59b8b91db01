//! Trend provider boundary.
//!
//! The bucketer never fetches anything itself; whatever produces report items for a
//! `(scope, unit, period)` window implements `TrendSource`.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::domain::{DatePeriod, ReportItem, Scope, TimeUnit};
use crate::error::AppError;
use crate::io::ingest::load_report_items;

pub trait TrendSource {
    fn report_items(&self, scope: Scope, unit: TimeUnit, period: &DatePeriod) -> Result<Vec<ReportItem>, AppError>;
}

/// Report items read from a local JSON or CSV export.
#[derive(Debug, Clone)]
pub struct FileTrendSource {
    path: PathBuf,
}

impl FileTrendSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TrendSource for FileTrendSource {
    fn report_items(&self, scope: Scope, unit: TimeUnit, period: &DatePeriod) -> Result<Vec<ReportItem>, AppError> {
        let ingested = load_report_items(&self.path)?;

        for err in &ingested.row_errors {
            warn!(
                line = err.line,
                name = err.name.as_deref().unwrap_or(""),
                "skipped report row: {}",
                err.message
            );
        }
        if let Some(declared) = ingested.scope {
            if declared != scope {
                warn!(
                    declared = declared.display_name(),
                    requested = scope.display_name(),
                    "report file scope differs from requested scope"
                );
            }
        }

        debug!(
            path = %self.path.display(),
            unit = unit.display_name(),
            start = %period.start(),
            end = %period.end(),
            items = ingested.items.len(),
            rows_used = ingested.rows_used,
            rows_read = ingested.rows_read,
            "loaded report items"
        );

        Ok(ingested.items)
    }
}

/// Report items already held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticTrendSource {
    items: Vec<ReportItem>,
}

impl StaticTrendSource {
    pub fn new(items: Vec<ReportItem>) -> Self {
        Self { items }
    }
}

impl TrendSource for StaticTrendSource {
    fn report_items(&self, _scope: Scope, _unit: TimeUnit, _period: &DatePeriod) -> Result<Vec<ReportItem>, AppError> {
        Ok(self.items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Write;

    #[test]
    fn file_source_reads_csv_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "name,date,value").unwrap();
        writeln!(file, "fever,2024-06-03,2").unwrap();
        writeln!(file, "fever,not-a-date,2").unwrap();

        let period = DatePeriod::containing(
            TimeUnit::Week,
            Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap(),
        )
        .unwrap();
        let source = FileTrendSource::new(file.path());
        let items = source.report_items(Scope::Individual, TimeUnit::Week, &period).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].value_at("2024-06-03"), 2.0);
    }

    #[test]
    fn file_source_reports_missing_file() {
        let period = DatePeriod::containing(
            TimeUnit::Week,
            Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap(),
        )
        .unwrap();
        let source = FileTrendSource::new("/definitely/not/here.json");
        let err = source
            .report_items(Scope::Individual, TimeUnit::Week, &period)
            .unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }
}
