//! ASCII bar preview for terminal output.
//!
//! This is intentionally "dumb" (fixed-height grid, one column per bucket), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Bars show per-bucket totals of the already-scaled values.

use crate::domain::{BucketedSeries, SeriesFile};

/// Render a vertical bar chart of per-bucket totals.
pub fn render_ascii_bars(series: &BucketedSeries, height: usize) -> String {
    let height = height.max(1);

    let totals: Vec<f64> = series
        .totals()
        .into_iter()
        .map(|t| if t.is_finite() { t.max(0.0) } else { 0.0 })
        .collect();
    let max = totals.iter().copied().fold(0.0, f64::max);
    let levels: Vec<usize> = totals.iter().map(|&t| bar_level(t, max, height)).collect();

    let mut out = format!(
        "Plot: buckets={} | base={} | max={max:.2}\n",
        series.len(),
        series.base
    );

    for row in 0..height {
        let threshold = height - row;
        let line: String = levels
            .iter()
            .map(|&level| if level >= threshold { '#' } else { ' ' })
            .collect();
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&"-".repeat(levels.len()));
    out.push('\n');

    out
}

/// Render a saved series file with its label as a title.
pub fn render_series_file(file: &SeriesFile, height: usize) -> String {
    let mut out = format!("{} ({}, {})\n", file.label, file.unit.display_name(), file.scope.display_name());
    out.push_str(&render_ascii_bars(&file.series, height));
    out
}

/// Rows filled for `total`; any positive total gets at least one row.
fn bar_level(total: f64, max: f64, height: usize) -> usize {
    if max <= 0.0 || total <= 0.0 {
        return 0;
    }
    let level = ((total / max) * height as f64).round() as usize;
    level.clamp(1, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bucket;
    use chrono::{Duration, TimeZone, Utc};

    fn series_of(totals: &[f64]) -> BucketedSeries {
        let start = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();
        BucketedSeries {
            buckets: totals
                .iter()
                .enumerate()
                .map(|(i, &t)| Bucket::new(start + Duration::days(i as i64), vec![t]))
                .collect(),
            base: 1,
        }
    }

    #[test]
    fn bars_golden_snapshot_small() {
        let txt = render_ascii_bars(&series_of(&[0.0, 2.0, 4.0]), 4);
        let expected = concat!(
            "Plot: buckets=3 | base=1 | max=4.00\n",
            "  #\n",
            "  #\n",
            " ##\n",
            " ##\n",
            "---\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn zero_baseline_draws_only_axis() {
        let txt = render_ascii_bars(&series_of(&[0.0; 7]), 2);
        assert_eq!(txt, "Plot: buckets=7 | base=1 | max=0.00\n       \n       \n-------\n");
    }

    #[test]
    fn small_positive_totals_stay_visible() {
        let txt = render_ascii_bars(&series_of(&[0.1, 100.0]), 3);
        assert!(txt.ends_with("##\n--\n"));
    }
}
