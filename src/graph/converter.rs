//! Report items -> chart series.

use tracing::debug;

use crate::domain::{Bucket, BucketedSeries, DatePeriod, ReportItem, TimeUnit};
use crate::graph::buckets::enumerate_buckets;
use crate::graph::scale::{rescale, scale_base};

/// Bucket `report_items` over `period` at the granularity of `unit` and scale the result.
///
/// Every bucket holds one value per report item (in input order), looked up by the
/// bucket's date key and defaulting to `0.0`. Without report items each bucket holds
/// a single `0.0` so the chart still draws a flat baseline.
pub fn build_graph_data(
    report_items: &[ReportItem],
    unit: TimeUnit,
    period: &DatePeriod,
) -> BucketedSeries {
    let dates = enumerate_buckets(unit, period);

    if report_items.is_empty() {
        debug!(buckets = dates.len(), unit = unit.display_name(), "no report items, emitting zero baseline");
        return BucketedSeries {
            buckets: dates.into_iter().map(|date| Bucket::new(date, vec![0.0])).collect(),
            base: 1,
        };
    }

    let mut buckets: Vec<Bucket> = dates
        .into_iter()
        .map(|date| {
            let key = unit.date_key(date);
            let values = report_items.iter().map(|item| item.value_at(&key)).collect();
            Bucket::new(date, values)
        })
        .collect();

    let max_total = buckets
        .iter()
        .map(Bucket::total)
        .reduce(f64::max)
        .unwrap_or(0.0);
    let base = scale_base(max_total);
    rescale(&mut buckets, base);

    debug!(
        buckets = buckets.len(),
        items = report_items.len(),
        max_total,
        base,
        "built graph data"
    );

    BucketedSeries { buckets, base }
}
