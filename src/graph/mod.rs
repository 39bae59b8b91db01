//! Trend-chart bucketing.
//!
//! - bucket enumeration over a period (`buckets`)
//! - shared scale base and floor rescaling (`scale`)
//! - the full report-items -> series conversion (`converter`)

pub mod buckets;
pub mod converter;
pub mod scale;

pub use buckets::enumerate_buckets;
pub use converter::build_graph_data;
pub use scale::{rescale, scale_base};
