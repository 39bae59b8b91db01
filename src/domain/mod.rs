//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - reporting granularity (`TimeUnit`) and trend scope (`Scope`)
//! - the calendar window being charted (`DatePeriod`)
//! - consumed trend rows (`ReportItem`) and the chart-ready output (`BucketedSeries`)
//! - run configuration (`GraphConfig`) and the portable series file (`SeriesFile`)

pub mod period;
pub mod types;

pub use period::DatePeriod;
pub use types::*;
