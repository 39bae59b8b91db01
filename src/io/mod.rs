//! Input/output helpers.
//!
//! - report-item ingest from JSON/CSV exports (`ingest`)
//! - the trend provider boundary (`source`)
//! - per-bucket CSV exports (`export`)
//! - series JSON read/write (`series`)

pub mod export;
pub mod ingest;
pub mod series;
pub mod source;

pub use export::*;
pub use ingest::*;
pub use series::*;
pub use source::*;
