#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use chrono::{Duration, NaiveDate};
use tandem::{merge, DateInterval};

#[derive(Clone, Debug, Arbitrary)]
struct Span {
    start: u8,
    len: u8,
}

impl Span {
    fn to_interval(&self) -> DateInterval {
        let origin = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let start = origin + Duration::days(i64::from(self.start));
        DateInterval::new(start, start + Duration::days(i64::from(self.len)))
    }
}

fuzz_target!(|spans: Vec<Span>| {
    let intervals: Vec<DateInterval> = spans.iter().map(Span::to_interval).collect();
    let merged = merge(intervals.clone());

    // Sorted, and no two runs share a day.
    for pair in merged.intervals().windows(2) {
        assert!(pair[0].end() <= pair[1].start());
    }

    // No run is empty, and the total is exactly their sum.
    assert!(merged.iter().all(|run| !run.is_empty()));
    let summed: i64 = merged.iter().map(DateInterval::days).sum();
    assert_eq!(summed, merged.total_days());

    // Every input lies wholly inside one run.
    for interval in intervals.iter().filter(|interval| !interval.is_empty()) {
        assert!(merged
            .iter()
            .any(|run| run.start() <= interval.start() && interval.end() <= run.end()));
    }

    // Merging again changes nothing.
    assert_eq!(merge(merged.clone()), merged);
});
