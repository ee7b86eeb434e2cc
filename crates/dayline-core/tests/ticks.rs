// File: crates/dayline-core/tests/ticks.rs
// Purpose: Tick label specificity ladder and evenly spaced tick positions.

use chrono::{DateTime, Duration, TimeZone, Utc};
use dayline_core::ticks::{time_tick_label, time_ticks, value_tick_label, value_ticks};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn label_walks_the_specificity_ladder() {
    // Year boundary: midnight, January 1st.
    assert_eq!(time_tick_label(&at(2021, 1, 1, 0, 0, 0)), "2021");
    // Month boundary: midnight on the first of a later month.
    assert_eq!(time_tick_label(&at(2021, 3, 1, 0, 0, 0)), "Mar 01");
    // Mid-month day.
    assert_eq!(time_tick_label(&at(2021, 1, 15, 0, 0, 0)), "Jan 15");
    // Whole hour.
    assert_eq!(time_tick_label(&at(2021, 1, 1, 15, 0, 0)), "03 PM");
    // Whole minute.
    assert_eq!(time_tick_label(&at(2021, 1, 1, 0, 30, 0)), "12:30");
    // Whole second.
    assert_eq!(time_tick_label(&at(2021, 1, 1, 0, 0, 45)), ":45");
    // Sub-second wins over everything.
    let with_ms = at(2021, 6, 15, 9, 30, 45) + Duration::milliseconds(250);
    assert_eq!(time_tick_label(&with_ms), ".250");
}

#[test]
fn time_ticks_cover_the_domain() {
    let t0 = at(2021, 1, 1, 0, 0, 0);
    let t1 = t0 + Duration::hours(10);
    let ticks = time_ticks((t0, t1), 5);
    assert_eq!(ticks.len(), 5);
    assert_eq!(ticks[0], t0);
    assert_eq!(*ticks.last().unwrap(), t1);
    assert_eq!(ticks[1] - ticks[0], Duration::minutes(150));
}

#[test]
fn tick_count_is_clamped_to_two() {
    let t0 = at(2021, 1, 1, 0, 0, 0);
    let t1 = t0 + Duration::hours(1);
    assert_eq!(time_ticks((t0, t1), 0).len(), 2);
    assert_eq!(value_ticks((0.0, 1.0), 1).len(), 2);
}

#[test]
fn value_ticks_are_evenly_spaced() {
    assert_eq!(value_ticks((0.0, 10.0), 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn value_labels_trim_trailing_zeros() {
    assert_eq!(value_tick_label(0.0), "0");
    assert_eq!(value_tick_label(2.0), "2");
    assert_eq!(value_tick_label(2.5), "2.5");
    assert_eq!(value_tick_label(2.25), "2.25");
    assert_eq!(value_tick_label(1234.0), "1234");
    assert_eq!(value_tick_label(-0.0), "0");
}
