//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the bucketing code stays free of presentation concerns
//! - output changes are localized (golden tests below)

use crate::domain::{BucketedSeries, GraphConfig, ReportItem, TimeUnit};
use crate::io::export::column_names;

/// Format the run summary (scope, period, scale base, legend).
pub fn format_run_summary(config: &GraphConfig, label: &str, items: &[ReportItem], series: &BucketedSeries) -> String {
    let mut out = String::new();

    out.push_str("=== trends - bucketed trend series ===\n");
    out.push_str(&format!("Scope: {}\n", config.scope.display_name()));
    out.push_str(&format!(
        "Period: {label} ({} .. {}) | unit={}\n",
        config.period.start().format("%Y-%m-%d"),
        config.period.end().format("%Y-%m-%d"),
        config.unit.display_name(),
    ));
    out.push_str(&format!(
        "Buckets: n={} | base={} | max={:.2}\n",
        series.len(),
        series.base,
        series.max_total(),
    ));

    out.push_str("\nItems:\n");
    if items.is_empty() {
        out.push_str("  (none)\n");
    }
    let names: Vec<String> = items.iter().map(|i| i.name.clone()).collect();
    for (item, name) in items.iter().zip(column_names(&names, items.len())) {
        let mut line = format!("- {name}");
        if let Some(value) = item.value {
            line.push_str(&format!(" value={value:.2}"));
        }
        if let Some(change) = item.change_rate {
            line.push_str(&format!(" change={:+.1}%", change * 100.0));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');

    out
}

/// Format one line per bucket: date key, values, total.
pub fn format_bucket_table(series: &BucketedSeries, names: &[String], unit: TimeUnit) -> String {
    let width = series.buckets.first().map(|b| b.values.len()).unwrap_or(0);
    let columns = column_names(names, width);

    let mut out = String::new();
    let mut header = format!("{:<10}", "bucket");
    for c in &columns {
        header.push_str(&format!(" {:>10}", truncate(c, 10)));
    }
    header.push_str(&format!(" {:>10}", "total"));
    out.push_str(header.trim_end());
    out.push('\n');

    let mut rule = format!("{:-<10}", "");
    for _ in 0..=columns.len() {
        rule.push_str(&format!(" {:-<10}", ""));
    }
    out.push_str(&rule);
    out.push('\n');

    for bucket in &series.buckets {
        let mut line = format!("{:<10}", unit.date_key(bucket.date));
        for v in &bucket.values {
            line.push_str(&format!(" {v:>10.2}"));
        }
        line.push_str(&format!(" {:>10.2}", bucket.total()));
        out.push_str(line.trim_end());
        out.push('\n');
    }

    if series.base > 1 {
        out.push_str(&format!("(values divided by {})\n", series.base));
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}
