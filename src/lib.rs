//! `autonomy-trends` library crate.
//!
//! Turns sparse trend report items into calendar-bucketed, uniformly scaled series
//! for chart rendering. The binary (`trends`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the bucketer can be embedded wherever charts are drawn

pub mod app;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod graph;
pub mod io;
pub mod plot;
pub mod report;

pub use domain::{Bucket, BucketedSeries, DatePeriod, ReportItem, TimeUnit};
pub use error::AppError;
pub use graph::build_graph_data;
