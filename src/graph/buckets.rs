//! Bucket enumeration.

use chrono::{DateTime, Utc};

use crate::domain::{DatePeriod, TimeUnit};

/// Start instants of every bucket in `period`, ascending and gap-free.
///
/// Steps one `unit.bucket_field()` at a time from `period.start()` and stops once the
/// next step would pass the end of the period truncated to that field. At least one
/// bucket is always produced; `DatePeriod` guarantees `start <= end`, so this terminates.
pub fn enumerate_buckets(unit: TimeUnit, period: &DatePeriod) -> Vec<DateTime<Utc>> {
    let field = unit.bucket_field();
    let limit = field.truncate(period.end());

    let mut dates = vec![period.start()];
    let mut step = 1;
    while let Some(next) = field.offset(period.start(), step) {
        if next > limit {
            break;
        }
        dates.push(next);
        step += 1;
    }

    dates
}
