// File: crates/dayline-core/src/ticks.rs
// Summary: Time tick label selection by specificity; evenly spaced tick positions.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

type Pred = fn(&DateTime<Utc>) -> bool;

fn always(_: &DateTime<Utc>) -> bool { true }
fn month_past_january(t: &DateTime<Utc>) -> bool { t.month() != 1 }
fn day_past_first(t: &DateTime<Utc>) -> bool { t.day() != 1 }
fn hour_nonzero(t: &DateTime<Utc>) -> bool { t.hour() != 0 }
fn minute_nonzero(t: &DateTime<Utc>) -> bool { t.minute() != 0 }
fn second_nonzero(t: &DateTime<Utc>) -> bool { t.second() != 0 }
fn millis_nonzero(t: &DateTime<Utc>) -> bool { t.timestamp_subsec_millis() != 0 }

/// Coarsest-to-finest (format, predicate) ladder. A label is picked by walking
/// from the most specific entry toward the front, stopping at the first entry
/// whose predicate holds; the year entry is the unconditional fallback reached
/// at exact year boundaries (midnight, January 1st).
const LADDER: [(&str, Pred); 7] = [
    ("%Y", always),
    ("%b %d", month_past_january),
    ("%b %d", day_past_first),
    ("%I %p", hour_nonzero),
    ("%I:%M", minute_nonzero),
    (":%S", second_nonzero),
    (".%3f", millis_nonzero),
];

/// Format a tick instant with the most specific label its fields call for.
pub fn time_tick_label(t: &DateTime<Utc>) -> String {
    let mut i = LADDER.len() - 1;
    while i > 0 && !(LADDER[i].1)(t) {
        i -= 1;
    }
    t.format(LADDER[i].0).to_string()
}

/// Evenly spaced tick instants across the domain, endpoints included.
/// `count` is clamped to at least 2.
pub fn time_ticks(domain: (DateTime<Utc>, DateTime<Utc>), count: usize) -> Vec<DateTime<Utc>> {
    let count = count.max(2);
    let span_ms = (domain.1 - domain.0).num_milliseconds();
    (0..count)
        .map(|i| domain.0 + Duration::milliseconds(span_ms * i as i64 / (count as i64 - 1)))
        .collect()
}

/// Evenly spaced value ticks across the domain, endpoints included.
pub fn value_ticks(domain: (f64, f64), count: usize) -> Vec<f64> {
    let count = count.max(2);
    let step = (domain.1 - domain.0) / (count as f64 - 1.0);
    (0..count).map(|i| domain.0 + step * i as f64).collect()
}

/// Numeric tick label with trailing zeros trimmed.
pub fn value_tick_label(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
