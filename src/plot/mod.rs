//! Terminal previews of bucketed series.

pub mod ascii;

pub use ascii::*;
