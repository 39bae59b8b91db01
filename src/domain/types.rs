//! Shared domain types.
//!
//! These types are kept serializable so a computed series can be exported to JSON
//! and reloaded later for plotting.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarField;
use crate::domain::DatePeriod;

/// Reporting granularity of a trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Field that bounds a period of this unit.
    pub fn calendar_field(self) -> CalendarField {
        match self {
            TimeUnit::Week => CalendarField::WeekOfYear,
            TimeUnit::Month => CalendarField::Month,
            TimeUnit::Year => CalendarField::Year,
        }
    }

    /// Field that one chart bucket spans: days for week/month charts, months for year charts.
    pub fn bucket_field(self) -> CalendarField {
        match self {
            TimeUnit::Week | TimeUnit::Month => CalendarField::Day,
            TimeUnit::Year => CalendarField::Month,
        }
    }

    /// `strftime` pattern of the keys in `ReportItem::distribution`.
    pub fn date_key_format(self) -> &'static str {
        match self {
            TimeUnit::Week | TimeUnit::Month => "%Y-%m-%d",
            TimeUnit::Year => "%Y-%m",
        }
    }

    /// Distribution key for the bucket starting at `date`.
    pub fn date_key(self, date: DateTime<Utc>) -> String {
        date.format(self.date_key_format()).to_string()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

/// Whose trend a set of report items describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Individual,
    Neighborhood,
    /// A saved point of interest.
    Poi,
}

impl Scope {
    pub fn display_name(self) -> &'static str {
        match self {
            Scope::Individual => "individual",
            Scope::Neighborhood => "neighborhood",
            Scope::Poi => "point of interest",
        }
    }
}

/// One trend series as delivered by the trend provider.
///
/// Only `distribution` feeds the chart; the remaining fields are carried for
/// legends and summaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportItem {
    #[serde(default)]
    pub name: String,
    /// Total for the whole period, as reported upstream.
    #[serde(default)]
    pub value: Option<f64>,
    /// Relative change versus the previous period.
    #[serde(default)]
    pub change_rate: Option<f64>,
    /// Date key (`yyyy-MM-dd` or `yyyy-MM`) -> value.
    #[serde(default)]
    pub distribution: BTreeMap<String, f64>,
}

impl ReportItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_point(mut self, key: impl Into<String>, value: f64) -> Self {
        self.distribution.insert(key.into(), value);
        self
    }

    /// Value recorded under `key`, or `0.0` when the key is absent.
    pub fn value_at(&self, key: &str) -> f64 {
        self.distribution.get(key).copied().unwrap_or(0.0)
    }
}

/// One calendar slot of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub date: DateTime<Utc>,
    /// One value per report item, in report-item order.
    pub values: Vec<f64>,
}

impl Bucket {
    pub fn new(date: DateTime<Utc>, values: Vec<f64>) -> Self {
        Self { date, values }
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Chart-ready output: chronologically ascending buckets plus the shared scale divisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketedSeries {
    pub buckets: Vec<Bucket>,
    /// Divisor already applied to every value (1, 5 or 10).
    pub base: u32,
}

impl BucketedSeries {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn dates(&self) -> Vec<DateTime<Utc>> {
        self.buckets.iter().map(|b| b.date).collect()
    }

    pub fn get(&self, date: DateTime<Utc>) -> Option<&[f64]> {
        self.buckets
            .iter()
            .find(|b| b.date == date)
            .map(|b| b.values.as_slice())
    }

    /// Per-bucket sums, in bucket order.
    pub fn totals(&self) -> Vec<f64> {
        self.buckets.iter().map(Bucket::total).collect()
    }

    /// Largest per-bucket sum (0 when there are no buckets).
    pub fn max_total(&self) -> f64 {
        self.buckets
            .iter()
            .map(Bucket::total)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub input: PathBuf,
    pub scope: Scope,
    pub unit: TimeUnit,
    pub period: DatePeriod,

    pub plot: bool,
    pub plot_height: usize,

    pub export_results: Option<PathBuf>,
    pub export_series: Option<PathBuf>,
}

/// A saved series file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesFile {
    pub tool: String,
    pub scope: Scope,
    pub unit: TimeUnit,
    pub period: DatePeriod,
    pub label: String,
    /// Report item names, aligned with each bucket's values.
    pub names: Vec<String>,
    pub series: BucketedSeries,
}
