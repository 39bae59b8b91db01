//! Report-item ingest.
//!
//! Turns a local export of the trend API into `ReportItem`s. Two shapes are accepted:
//!
//! - JSON: an array of report items, or `{ "scope": ..., "report_items": [...] }`
//! - CSV: one row per data point with `name,date,value` columns
//!
//! CSV rows that fail validation are skipped and reported as `RowError`s; a missing
//! column or an unreadable file fails the whole ingest (exit code 2).

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use serde::Deserialize;

use crate::domain::{ReportItem, Scope};
use crate::error::AppError;

/// A row-level error encountered during CSV ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub name: Option<String>,
    pub message: String,
}

/// Ingest output: report items in first-seen order plus row diagnostics.
#[derive(Debug, Clone, Default)]
pub struct IngestedItems {
    pub items: Vec<ReportItem>,
    /// Scope declared by the payload, if any.
    pub scope: Option<Scope>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReportPayload {
    Items(Vec<ReportItem>),
    Envelope {
        #[serde(default)]
        scope: Option<Scope>,
        report_items: Vec<ReportItem>,
    },
}

/// Load report items, picking the format from the file extension (`.csv`, else JSON).
pub fn load_report_items(path: &Path) -> Result<IngestedItems, AppError> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open report items '{}': {e}", path.display())))?;
    let reader = BufReader::new(file);

    if is_csv {
        parse_report_items_csv(reader)
    } else {
        parse_report_items_json(reader)
    }
}

pub fn parse_report_items_json(reader: impl Read) -> Result<IngestedItems, AppError> {
    let payload: ReportPayload = serde_json::from_reader(reader)
        .map_err(|e| AppError::input(format!("Invalid report items JSON: {e}")))?;

    let (scope, mut items) = match payload {
        ReportPayload::Items(items) => (None, items),
        ReportPayload::Envelope { scope, report_items } => (scope, report_items),
    };
    items.iter_mut().for_each(normalize_distribution);

    let n = items.len();
    Ok(IngestedItems {
        items,
        scope,
        row_errors: Vec::new(),
        rows_read: n,
        rows_used: n,
    })
}

pub fn parse_report_items_csv(reader: impl Read) -> Result<IngestedItems, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let name_idx = header_map.get("name").copied();
    let date_idx = required_column(&header_map, "date")?;
    let value_idx = required_column(&header_map, "value")?;

    let mut out = IngestedItems::default();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for (idx, result) in reader.records().enumerate() {
        // Line 1 is the header.
        let line = idx + 2;
        out.rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                out.row_errors.push(RowError {
                    line,
                    name: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        let name = name_idx
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .to_string();

        let (date, value) = match parse_point(&record, date_idx, value_idx) {
            Ok(point) => point,
            Err(message) => {
                out.row_errors.push(RowError {
                    line,
                    name: Some(name),
                    message,
                });
                continue;
            }
        };

        let slot = *index_by_name.entry(name.clone()).or_insert_with(|| {
            out.items.push(ReportItem::new(name));
            out.items.len() - 1
        });
        *out.items[slot].distribution.entry(date).or_insert(0.0) += value;
        out.rows_used += 1;
    }

    Ok(out)
}

fn parse_point(record: &StringRecord, date_idx: usize, value_idx: usize) -> Result<(String, f64), String> {
    let date = record.get(date_idx).unwrap_or("");
    let key = normalize_date_key(date)
        .ok_or_else(|| format!("invalid date key '{date}' (use YYYY-MM-DD or YYYY-MM)"))?;

    let raw = record.get(value_idx).unwrap_or("");
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("invalid value '{raw}'"))?;
    if !value.is_finite() {
        return Err(format!("non-finite value '{raw}'"));
    }

    Ok((key, value))
}

/// Zero-padded `YYYY-MM-DD` or `YYYY-MM` key for a date string, matching `TimeUnit::date_key`.
///
/// Chrono also accepts unpadded fields (`2024-6-3`), which would never match a bucket key.
fn normalize_date_key(s: &str) -> Option<String> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.format("%Y-%m-%d").to_string());
    }
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%Y-%m").to_string())
}

/// Re-key a distribution with normalized date keys; unparseable keys are kept as-is.
fn normalize_distribution(item: &mut ReportItem) {
    let raw = std::mem::take(&mut item.distribution);
    for (key, value) in raw {
        let key = normalize_date_key(&key).unwrap_or(key);
        *item.distribution.entry(key).or_insert(0.0) += value;
    }
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_ascii_lowercase(), i))
        .collect()
}

fn required_column(header_map: &HashMap<String, usize>, name: &str) -> Result<usize, AppError> {
    header_map
        .get(name)
        .copied()
        .ok_or_else(|| AppError::input(format!("CSV is missing required column '{name}'.")))
}
