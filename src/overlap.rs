use crate::interval::DateInterval;

/// Returns the days two intervals have in common, if any.
///
/// An overlap of zero days is no overlap: if one interval starts on the
/// day the other ends, the two are not considered to have been together.
///
/// ```
/// use chrono::NaiveDate;
/// use tandem::{overlap, DateInterval};
///
/// let date = |d| NaiveDate::from_ymd_opt(2014, 3, d).unwrap();
/// let long = DateInterval::new(date(1), date(31));
/// let short = DateInterval::new(date(15), date(16));
/// assert_eq!(overlap(&long, &short), Some(short));
/// assert_eq!(overlap(&DateInterval::new(date(1), date(15)), &short), None);
/// ```
pub fn overlap(a: &DateInterval, b: &DateInterval) -> Option<DateInterval> {
    let latest_start = a.start().max(b.start());
    let earliest_end = a.end().min(b.end());

    if latest_start >= earliest_end {
        return None;
    }

    Some(DateInterval::new(latest_start, earliest_end))
}
