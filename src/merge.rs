use crate::interval::DateInterval;
use core::fmt::{self, Debug};
use core::iter::{FusedIterator, Peekable};

#[cfg(feature = "serde1")]
use serde::Serialize;

/// A minimal set of disjoint intervals covering the same days as
/// some collection of (possibly overlapping) intervals, ordered by start.
///
/// Intervals that merely touch, i.e. where one ends on the day the other
/// starts, are kept apart: they share no day, and only an interval that
/// overlaps both of them can bridge the two.
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize))]
pub struct Merged {
    intervals: Vec<DateInterval>,
    total_days: i64,
}

impl Merged {
    /// The disjoint intervals, ordered by start.
    pub fn intervals(&self) -> &[DateInterval] {
        &self.intervals
    }

    /// Sum of the lengths of all disjoint intervals; every covered
    /// day is counted exactly once.
    pub fn total_days(&self) -> i64 {
        self.total_days
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DateInterval> {
        self.intervals.iter()
    }
}

/// Collapses an unordered collection of intervals into disjoint runs
/// and sums their lengths.
///
/// The result does not depend on the order of the input.
///
/// ```
/// use chrono::NaiveDate;
/// use tandem::{merge, DateInterval};
///
/// let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let merged = merge(vec![
///     DateInterval::new(date(5), date(20)),
///     DateInterval::new(date(1), date(10)),
/// ]);
/// assert_eq!(merged.intervals(), &[DateInterval::new(date(1), date(20))]);
/// assert_eq!(merged.total_days(), 19);
/// ```
pub fn merge<I>(intervals: I) -> Merged
where
    I: IntoIterator<Item = DateInterval>,
{
    let mut sorted: Vec<DateInterval> = intervals
        .into_iter()
        .filter(|interval| !interval.is_empty())
        .collect();
    sorted.sort_unstable();
    Coalesce::new(sorted.into_iter()).collect()
}

impl FromIterator<DateInterval> for Merged {
    /// Collects intervals that are already sorted and disjoint.
    /// Use [`merge`] for anything else.
    fn from_iter<T: IntoIterator<Item = DateInterval>>(iter: T) -> Self {
        let intervals: Vec<DateInterval> = iter.into_iter().collect();
        debug_assert!(intervals
            .windows(2)
            .all(|pair| pair[0].end() <= pair[1].start()));
        let total_days = intervals.iter().map(DateInterval::days).sum();
        Merged {
            intervals,
            total_days,
        }
    }
}

impl IntoIterator for Merged {
    type Item = DateInterval;
    type IntoIter = std::vec::IntoIter<DateInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

// Implement it in the same way that a `BTreeSet` does.
impl Debug for Merged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator that merges a stream of intervals sorted by start
/// into disjoint runs.
///
/// Requires that the input is sorted by start. Empty intervals
/// cover no days and are dropped.
pub struct Coalesce<I>
where
    I: Iterator<Item = DateInterval>,
{
    inner: Peekable<I>,
}

impl<I> Coalesce<I>
where
    I: Iterator<Item = DateInterval>,
{
    pub fn new(sorted: I) -> Self {
        Coalesce {
            inner: sorted.peekable(),
        }
    }
}

/// Extends `run` to cover `next` if the two share at least one day.
fn absorb(run: &mut DateInterval, next: &DateInterval) -> bool {
    // `next` starts no earlier than `run`, so they share a day exactly
    // when `next` starts before `run` ends.
    if !run.contains(&next.start()) {
        return false;
    }

    if next.end() > run.end() {
        *run = DateInterval::new(run.start(), next.end());
    }

    true
}

impl<I> Iterator for Coalesce<I>
where
    I: Iterator<Item = DateInterval>,
{
    type Item = DateInterval;

    fn next(&mut self) -> Option<Self::Item> {
        let mut run = loop {
            let candidate = self.inner.next()?;
            if !candidate.is_empty() {
                break candidate;
            }
        };

        // keep merging as long as the next interval shares a day with the run
        while let Some(next) = self.inner.peek() {
            if next.is_empty() || absorb(&mut run, next) {
                self.inner.next();
            } else {
                break;
            }
        }

        Some(run)
    }
}

impl<I> FusedIterator for Coalesce<I> where I: FusedIterator<Item = DateInterval> {}
