//! Calendar fields (day, ISO week, month, year).
//!
//! All arithmetic is done on the UTC calendar. Stepping is always computed from an
//! origin (`origin + n fields`) rather than by repeatedly adding one field, so month
//! steps that clamp (Jan 31 -> Feb 28) do not drift for the rest of the series.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar component used for period boundaries and bucket stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarField {
    Day,
    /// ISO week (Monday start).
    WeekOfYear,
    Month,
    Year,
}

impl CalendarField {
    /// Start (midnight) of the field containing `instant`.
    pub fn truncate(self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let date = instant.date_naive();
        let start = match self {
            CalendarField::Day => date,
            CalendarField::WeekOfYear => {
                date - Duration::days(date.weekday().num_days_from_monday() as i64)
            }
            CalendarField::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date),
            CalendarField::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        };
        start.and_time(NaiveTime::MIN).and_utc()
    }

    /// `origin` shifted by `n` whole fields (negative `n` steps backwards).
    ///
    /// Month and year steps clamp to the last day of shorter months. Returns `None`
    /// only when the result leaves chrono's representable range.
    pub fn offset(self, origin: DateTime<Utc>, n: i32) -> Option<DateTime<Utc>> {
        match self {
            CalendarField::Day => origin.checked_add_signed(Duration::days(n as i64)),
            CalendarField::WeekOfYear => origin.checked_add_signed(Duration::weeks(n as i64)),
            CalendarField::Month => shift_months(origin, n),
            CalendarField::Year => shift_months(origin, n.checked_mul(12)?),
        }
    }
}

fn shift_months(origin: DateTime<Utc>, months: i32) -> Option<DateTime<Utc>> {
    let magnitude = Months::new(months.unsigned_abs());
    if months >= 0 {
        origin.checked_add_months(magnitude)
    } else {
        origin.checked_sub_months(magnitude)
    }
}
