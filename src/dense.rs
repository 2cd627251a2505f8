use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::interval::DateInterval;
use crate::merge::Merged;

// A simple but infeasibly slow and memory-hungry
// version of `Merged` for testing.
//
// Stores every covered day individually, so there
// is no way for it to count a day twice.
#[derive(Eq, PartialEq, Debug, Default)]
pub struct DenseDaySet {
    days: BTreeSet<NaiveDate>,
}

impl DenseDaySet {
    pub fn new() -> DenseDaySet {
        DenseDaySet::default()
    }

    pub fn insert(&mut self, interval: &DateInterval) {
        self.days.extend(interval.iter_days());
    }

    pub fn total_days(&self) -> i64 {
        self.days.len() as i64
    }
}

impl<'a> FromIterator<&'a DateInterval> for DenseDaySet {
    fn from_iter<T: IntoIterator<Item = &'a DateInterval>>(iter: T) -> Self {
        let mut dense = DenseDaySet::new();
        for interval in iter {
            dense.insert(interval);
        }
        dense
    }
}

impl From<&Merged> for DenseDaySet {
    fn from(merged: &Merged) -> Self {
        merged.iter().collect()
    }
}
