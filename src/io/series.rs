//! Read/write series JSON files.
//!
//! Series JSON is the portable representation of one computed chart: run metadata
//! (scope, unit, period, label) plus the bucketed, already-scaled values. The schema
//! is defined by `domain::SeriesFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::SeriesFile;
use crate::error::AppError;

/// Write a series JSON file.
pub fn write_series_json(path: &Path, file: &SeriesFile) -> Result<(), AppError> {
    let out = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create series JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(out, file)
        .map_err(|e| AppError::input(format!("Failed to write series JSON: {e}")))?;
    Ok(())
}

/// Read a series JSON file. Reversed periods fail to deserialize.
pub fn read_series_json(path: &Path) -> Result<SeriesFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open series JSON '{}': {e}", path.display())))?;
    let series: SeriesFile =
        serde_json::from_reader(file).map_err(|e| AppError::input(format!("Invalid series JSON: {e}")))?;
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BucketedSeries, DatePeriod, ReportItem, Scope, TimeUnit};
    use crate::graph::build_graph_data;
    use chrono::{TimeZone, Utc};

    #[test]
    fn saved_series_reloads() {
        let period = DatePeriod::containing(
            TimeUnit::Week,
            Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap(),
        )
        .unwrap();
        let items = vec![ReportItem::new("fever").with_point("2024-06-04", 80.0)];
        let series: BucketedSeries = build_graph_data(&items, TimeUnit::Week, &period);
        let file = SeriesFile {
            tool: "trends".to_string(),
            scope: Scope::Individual,
            unit: TimeUnit::Week,
            period,
            label: period.humanize(TimeUnit::Week, 2024),
            names: vec!["fever".to_string()],
            series,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.json");
        write_series_json(&path, &file).unwrap();
        let back = read_series_json(&path).unwrap();

        assert_eq!(back.label, "Jun 3-9");
        assert_eq!(back.period, period);
        assert_eq!(back.series, file.series);
        assert_eq!(back.series.base, 5);
    }

    #[test]
    fn reversed_period_is_rejected_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"tool":"trends","scope":"individual","unit":"week",
                "period":{"start":"2024-06-09T00:00:00Z","end":"2024-06-03T00:00:00Z"},
                "label":"","names":[],"series":{"buckets":[],"base":1}}"#,
        )
        .unwrap();
        let err = read_series_json(&path).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
        assert!(err.to_string().contains("is after its end"));
    }
}
