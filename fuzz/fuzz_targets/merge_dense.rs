#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;
use tandem::{merge, DateInterval};

#[derive(Clone, Debug, Arbitrary)]
struct Span {
    start: u8,
    len: u8,
}

fuzz_target!(|spans: Vec<Span>| {
    let origin = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let intervals: Vec<DateInterval> = spans
        .iter()
        .map(|span| {
            let start = origin + Duration::days(i64::from(span.start));
            DateInterval::new(start, start + Duration::days(i64::from(span.len)))
        })
        .collect();

    // Count distinct days the slow way.
    let days: BTreeSet<NaiveDate> = intervals.iter().flat_map(|i| i.iter_days()).collect();

    let merged = merge(intervals.iter().rev().cloned());
    assert_eq!(merged.total_days(), days.len() as i64);
    assert_eq!(merged, merge(intervals));
});
