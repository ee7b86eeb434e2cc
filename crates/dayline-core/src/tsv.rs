// File: crates/dayline-core/src/tsv.rs
// Summary: Day-file TSV parsing and per-category series building.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::ChartError;
use crate::scale::ScaleKind;
use crate::series::Series;

/// One parsed TSV row: a timestamp followed by the raw value cells.
/// Cell `i` aligns positionally with category `i` (file column `i + 2`,
/// counting the timestamp column as 1).
#[derive(Clone, Debug)]
pub struct DayRow {
    pub timestamp: DateTime<Utc>,
    pub cells: Vec<String>,
}

/// Parse tab-separated rows. Column 0 must be a timestamp; the remaining
/// columns are kept verbatim and parsed per category in [`build_series`].
pub fn parse_rows(text: &str) -> Result<Vec<DayRow>, ChartError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let line = i + 1;
        let raw = record.get(0).unwrap_or("");
        let timestamp = parse_timestamp(raw).ok_or_else(|| ChartError::Timestamp {
            line,
            value: raw.to_string(),
        })?;
        let cells = record.iter().skip(1).map(|c| c.trim().to_string()).collect();
        rows.push(DayRow { timestamp, cells });
    }
    Ok(rows)
}

/// Parse a timestamp cell. Accepts RFC 3339, `%Y-%m-%d %H:%M:%S`, and bare
/// dates (`-` or `/` separated), which resolve to midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(t.and_utc());
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_time(NaiveTime::MIN).and_utc());
        }
    }
    None
}

/// Build one series per category by pairing row timestamps with the
/// category's column, transformed by `scale`. Series with more than one
/// point survive; with N rows and M categories the result has at most M
/// series of exactly N points each.
pub fn build_series(
    rows: &[DayRow],
    categories: &[String],
    scale: ScaleKind,
) -> Result<Vec<Series>, ChartError> {
    let mut out = Vec::with_capacity(categories.len());
    for (i, name) in categories.iter().enumerate() {
        let mut points = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let line = r + 1;
            let column = i + 2;
            let cell = row
                .cells
                .get(i)
                .filter(|c| !c.is_empty())
                .ok_or(ChartError::MissingColumn { line, column })?;
            let value: f64 = cell.parse().map_err(|_| ChartError::Number {
                line,
                column,
                value: cell.clone(),
            })?;
            points.push((row.timestamp, scale.apply(value)));
        }
        let series = Series::new(name.clone(), points);
        if series.is_drawable() {
            out.push(series);
        }
    }
    Ok(out)
}
