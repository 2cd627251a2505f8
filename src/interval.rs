use chrono::NaiveDate;
use core::fmt::{self, Debug, Display};
use core::ops::Range;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// A (half-open) span of calendar days bounded inclusively below
/// and exclusively above `(start..end)`.
///
/// The interval covers the days `start`, `start + 1`, ... up to but
/// not including `end`, so its length is simply `end - start`. Two
/// intervals where one ends on the day the other starts share no day.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde1",
    derive(Serialize, Deserialize),
    serde(try_from = "[NaiveDate; 2]", into = "[NaiveDate; 2]")
)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

/// Returned when an interval would end before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("interval ends on {end} before it starts on {start}")]
pub struct InvertedInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    /// Makes a new interval.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        assert!(start <= end, "interval {start}..{end} ends before it starts");
        DateInterval { start, end }
    }

    /// Makes a new interval, or reports why the bounds don't form one.
    pub fn try_new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvertedInterval> {
        if start > end {
            return Err(InvertedInterval { start, end });
        }
        Ok(DateInterval { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of whole days covered.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Returns `true` if the interval covers no days at all.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `date` falls on one of the covered days.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        *date >= self.start && *date < self.end
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        use core::cmp::{max, min};
        // Strictly less than, because ends are excluded.
        max(self.start, other.start) < min(self.end, other.end)
    }

    /// The covered days as a standard range.
    pub fn as_range(&self) -> Range<NaiveDate> {
        self.start..self.end
    }

    /// Iterates every covered day in order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day < end)
    }
}

impl TryFrom<Range<NaiveDate>> for DateInterval {
    type Error = InvertedInterval;

    fn try_from(range: Range<NaiveDate>) -> Result<Self, Self::Error> {
        DateInterval::try_new(range.start, range.end)
    }
}

impl TryFrom<[NaiveDate; 2]> for DateInterval {
    type Error = InvertedInterval;

    fn try_from([start, end]: [NaiveDate; 2]) -> Result<Self, Self::Error> {
        DateInterval::try_new(start, end)
    }
}

impl From<DateInterval> for [NaiveDate; 2] {
    fn from(interval: DateInterval) -> Self {
        [interval.start, interval.end]
    }
}

impl From<DateInterval> for Range<NaiveDate> {
    fn from(interval: DateInterval) -> Self {
        interval.as_range()
    }
}

// Same shape as `Range`'s own `Debug`, which keeps test failures readable.
impl Debug for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.start, self.end)
    }
}

#[cfg(test)]
pub(crate) fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

#[cfg(test)]
pub(crate) fn span(start: &str, end: &str) -> DateInterval {
    DateInterval::new(day(start), day(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_is_end_minus_start() {
        assert_eq!(span("2024-01-01", "2024-01-10").days(), 9);
        assert_eq!(span("2024-02-28", "2024-03-01").days(), 2);
        assert_eq!(span("2023-02-28", "2023-03-01").days(), 1);
        assert_eq!(span("2024-01-01", "2024-01-01").days(), 0);
    }

    #[test]
    fn single_date_interval_is_empty() {
        assert!(span("2024-01-01", "2024-01-01").is_empty());
        assert!(!span("2024-01-01", "2024-01-02").is_empty());
    }

    #[test]
    #[should_panic]
    fn new_rejects_inverted_bounds() {
        let _ = span("2024-01-02", "2024-01-01");
    }

    #[test]
    fn try_new_reports_inverted_bounds() {
        assert_eq!(
            DateInterval::try_new(day("2024-01-02"), day("2024-01-01")),
            Err(InvertedInterval {
                start: day("2024-01-02"),
                end: day("2024-01-01"),
            })
        );
        assert!(DateInterval::try_new(day("2024-01-01"), day("2024-01-01")).is_ok());
    }

    #[test]
    fn end_is_excluded() {
        let interval = span("2024-01-01", "2024-01-03");
        assert!(interval.contains(&day("2024-01-01")));
        assert!(interval.contains(&day("2024-01-02")));
        assert!(!interval.contains(&day("2024-01-03")));
        assert_eq!(
            interval.iter_days().collect::<Vec<_>>(),
            vec![day("2024-01-01"), day("2024-01-02")]
        );
    }

    #[test]
    fn adjacent_intervals_do_not_overlap() {
        let first = span("2024-01-01", "2024-01-10");
        let second = span("2024-01-10", "2024-01-20");
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
        assert_eq!(first.end(), second.start());
    }

    #[test]
    fn separated_intervals_do_not_overlap() {
        let first = span("2024-01-01", "2024-01-10");
        let second = span("2024-01-11", "2024-01-20");
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn debug_repr_looks_like_a_range() {
        assert_eq!(
            format!("{:?}", span("2024-01-01", "2024-01-10")),
            "2024-01-01..2024-01-10"
        );
        assert_eq!(
            format!("{}", span("2024-01-01", "2024-01-10")),
            "2024-01-01, 2024-01-10"
        );
    }

    #[cfg(feature = "serde1")]
    #[test]
    fn serialization() {
        let output = serde_json::to_string(&span("2024-01-01", "2024-01-10"))
            .expect("Failed to serialize");
        assert_eq!(output, r#"["2024-01-01","2024-01-10"]"#);
    }

    #[cfg(feature = "serde1")]
    #[test]
    fn deserialization_rejects_inverted_bounds() {
        let input = r#"["2024-01-10","2024-01-01"]"#;
        assert!(serde_json::from_str::<DateInterval>(input).is_err());
        let input = r#"["2024-01-01","2024-01-10"]"#;
        let interval: DateInterval = serde_json::from_str(input).expect("Failed to deserialize");
        assert_eq!(interval, span("2024-01-01", "2024-01-10"));
    }
}
