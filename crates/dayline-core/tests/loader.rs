// File: crates/dayline-core/tests/loader.rs
// Purpose: Day-file URL construction and the log-and-clear failure fallback.

use chrono::NaiveDate;
use dayline_core::{ChartOptions, DataLoader};

#[test]
fn day_url_concatenates_base_prefix_and_date() {
    let loader = DataLoader::new(ChartOptions {
        base_url: "http://stats.local/data/".to_string(),
        prefix: "requests-".to_string(),
        ..ChartOptions::default()
    });
    let date = NaiveDate::from_ymd_opt(2021, 3, 9).unwrap();
    assert_eq!(
        loader.day_url(date),
        "http://stats.local/data/requests-20210309.tsv"
    );
}

#[test]
fn failed_load_falls_back_to_the_empty_state() {
    // Port 9 (discard) is refused on any sane host; either way the request
    // cannot produce a day file.
    let loader = DataLoader::new(ChartOptions {
        base_url: "http://127.0.0.1:9/".to_string(),
        categories: vec!["a".to_string()],
        ..ChartOptions::default()
    });
    let state = loader.load_day_or_empty(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    assert!(state.is_empty());
    assert!(state.series.is_empty());
}
