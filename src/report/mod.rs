//! Reporting utilities: run summaries and per-bucket tables.

mod format;

pub use format::*;
