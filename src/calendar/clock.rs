//! Source of "now".
//!
//! Labels only need the current year, but the clock is passed around explicitly so
//! tests (and `TRENDS_CURRENT_YEAR`) can pin it.

use chrono::{DateTime, Datelike, TimeZone, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn current_year(&self) -> i32 {
        self.now().year()
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }

    /// Midnight on January 1st of `year`.
    pub fn at_year(year: i32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single().map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_year() {
        let clock = FixedClock::at_year(2021).unwrap();
        assert_eq!(clock.current_year(), 2021);
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());
    }
}
