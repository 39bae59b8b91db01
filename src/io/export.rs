//! Export a bucketed series to CSV.
//!
//! One row per bucket, one column per report item, plus the bucket total. Values are
//! written as stored in the series, i.e. already divided by its base.

use std::path::Path;

use crate::domain::{BucketedSeries, TimeUnit};
use crate::error::AppError;

/// Write per-bucket values to a CSV file.
pub fn write_series_csv(path: &Path, series: &BucketedSeries, names: &[String], unit: TimeUnit) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::input(format!("Failed to create export CSV '{}': {e}", path.display())))?;

    let width = series.buckets.first().map(|b| b.values.len()).unwrap_or(0);
    let mut header = vec!["bucket_date".to_string()];
    header.extend(column_names(names, width));
    header.push("total".to_string());
    header.push("base".to_string());
    writer
        .write_record(&header)
        .map_err(|e| AppError::input(format!("Failed to write export CSV header: {e}")))?;

    for bucket in &series.buckets {
        let mut row = vec![unit.date_key(bucket.date)];
        row.extend(bucket.values.iter().map(|v| format!("{v}")));
        row.push(format!("{}", bucket.total()));
        row.push(series.base.to_string());
        writer
            .write_record(&row)
            .map_err(|e| AppError::input(format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::input(format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

/// Column labels for `width` value columns, falling back to `series_N` for blank or missing names.
pub fn column_names(names: &[String], width: usize) -> Vec<String> {
    (0..width)
        .map(|i| match names.get(i).map(|n| n.trim()) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("series_{}", i + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bucket;
    use chrono::{TimeZone, Utc};

    #[test]
    fn column_names_fill_blanks() {
        let names = vec!["fever".to_string(), " ".to_string()];
        assert_eq!(column_names(&names, 3), vec!["fever", "series_2", "series_3"]);
    }

    #[test]
    fn writes_one_row_per_bucket() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.csv");
        let series = BucketedSeries {
            buckets: vec![
                Bucket::new(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(), vec![1.0, 2.5]),
                Bucket::new(Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap(), vec![0.0, 3.0]),
            ],
            base: 1,
        };
        let names = vec!["a".to_string(), "b,c".to_string()];
        write_series_csv(&path, &series, &names, TimeUnit::Week).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let expected = concat!(
            "bucket_date,a,\"b,c\",total,base\n",
            "2024-06-01,1,2.5,3.5,1\n",
            "2024-06-02,0,3,3,1\n",
        );
        assert_eq!(text, expected);
    }
}
