//! Calendar arithmetic shared by periods and bucket enumeration.
//!
//! - `CalendarField`: truncation to the start of a field and drift-free stepping
//! - `Clock`: the injected "now" used when labels depend on the current year

pub mod clock;
pub mod field;

pub use clock::{Clock, FixedClock, SystemClock};
pub use field::CalendarField;
