//! Calendar windows shown on a trend chart.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::Clock;
use crate::domain::TimeUnit;
use crate::error::AppError;

/// A closed time range `[start, end]` with `start <= end`.
///
/// Deserialization goes through `DatePeriod::new`, so a reversed period cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PeriodBounds")]
pub struct DatePeriod {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Unchecked wire form of a `DatePeriod`.
#[derive(Deserialize)]
struct PeriodBounds {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<PeriodBounds> for DatePeriod {
    type Error = AppError;

    fn try_from(bounds: PeriodBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.start, bounds.end)
    }
}

impl DatePeriod {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, AppError> {
        let period = Self { start, end };
        period.validate()?;
        Ok(period)
    }

    /// The whole week (ISO), month or year containing `instant`.
    ///
    /// `end` is the last second of the period.
    pub fn containing(unit: TimeUnit, instant: DateTime<Utc>) -> Result<Self, AppError> {
        let field = unit.calendar_field();
        let start = field.truncate(instant);
        let next = field
            .offset(start, 1)
            .ok_or_else(|| AppError::invalid_period(format!("No {} follows {start}.", unit.display_name())))?;
        Self::new(start, next - Duration::seconds(1))
    }

    /// The calendar period of `unit` right after this one.
    pub fn next(&self, unit: TimeUnit) -> Result<Self, AppError> {
        self.shifted(unit, 1)
    }

    /// The calendar period of `unit` right before this one.
    pub fn previous(&self, unit: TimeUnit) -> Result<Self, AppError> {
        self.shifted(unit, -1)
    }

    fn shifted(&self, unit: TimeUnit, n: i32) -> Result<Self, AppError> {
        let field = unit.calendar_field();
        let anchor = field
            .offset(field.truncate(self.start), n)
            .ok_or_else(|| AppError::invalid_period("Period shift leaves the supported date range."))?;
        Self::containing(unit, anchor)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Move the end of the period (e.g. clip to "today"), keeping `start <= end`.
    pub fn set_end(&mut self, end: DateTime<Utc>) -> Result<(), AppError> {
        *self = Self::new(self.start, end)?;
        Ok(())
    }

    pub fn with_end(mut self, end: DateTime<Utc>) -> Result<Self, AppError> {
        self.set_end(end)?;
        Ok(self)
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.start > self.end {
            return Err(AppError::invalid_period(format!(
                "Period start {} is after its end {}.",
                self.start.format("%Y-%m-%d %H:%M:%S"),
                self.end.format("%Y-%m-%d %H:%M:%S"),
            )));
        }
        Ok(())
    }

    /// Chart title for this period.
    ///
    /// - week: `Jun 1-7`, or `Jun 29 - Jul 5` across months
    /// - month: `June` in `current_year`, otherwise `June 2023`
    /// - year: `2024`
    pub fn humanize(&self, unit: TimeUnit, current_year: i32) -> String {
        let (start, end) = (self.start, self.end);
        match unit {
            TimeUnit::Week => {
                if start.year() == end.year() && start.month() == end.month() {
                    format!("{} {}-{}", start.format("%b"), start.day(), end.day())
                } else {
                    format!(
                        "{} {} - {} {}",
                        start.format("%b"),
                        start.day(),
                        end.format("%b"),
                        end.day()
                    )
                }
            }
            TimeUnit::Month => {
                if start.year() == current_year {
                    start.format("%B").to_string()
                } else {
                    start.format("%B %Y").to_string()
                }
            }
            TimeUnit::Year => start.year().to_string(),
        }
    }

    pub fn humanize_with(&self, unit: TimeUnit, clock: &dyn Clock) -> String {
        self.humanize(unit, clock.current_year())
    }
}
