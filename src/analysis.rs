use std::collections::BTreeMap;

use tracing::{debug, info, trace, warn};

use crate::interval::DateInterval;
use crate::merge::{merge, Merged};
use crate::overlap::overlap;
use crate::pair::{PairKey, ProjectId};
use crate::roster::Roster;

#[cfg(feature = "serde1")]
use serde::Serialize;

/// Days a pair of employees spent together on one project.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde1", derive(Serialize))]
pub struct PairOverlap {
    pub pair: PairKey,
    pub project: ProjectId,
    pub interval: DateInterval,
}

impl PairOverlap {
    pub fn days(&self) -> i64 {
        self.interval.days()
    }
}

/// Days a pair of employees spent together across all projects,
/// with every shared day counted once.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde1", derive(Serialize))]
pub struct PairTotal {
    pub pair: PairKey,
    pub merged: Merged,
}

impl PairTotal {
    pub fn total_days(&self) -> i64 {
        self.merged.total_days()
    }
}

/// Finds, for every project, each pair of attendees whose
/// assignments overlapped and for how long.
///
/// Pairs that shared a project but never overlapped in time do not
/// appear at all, and neither do employees listed more than once on
/// the same project paired with themselves.
pub fn pair_overlaps(roster: &Roster) -> BTreeMap<PairKey, Vec<PairOverlap>> {
    let mut pairs: BTreeMap<PairKey, Vec<PairOverlap>> = BTreeMap::new();

    for (project, attendees) in roster.projects() {
        debug!(project = %project, attendees = attendees.len(), "scanning project");

        for (i, first) in attendees.iter().enumerate() {
            for second in &attendees[i + 1..] {
                let Some(pair) = PairKey::new(first.employee.clone(), second.employee.clone())
                else {
                    warn!(
                        project = %project,
                        employee = %first.employee,
                        "employee listed more than once on the same project"
                    );
                    continue;
                };

                let Some(interval) = overlap(&first.interval, &second.interval) else {
                    continue;
                };

                trace!(pair = %pair, project = %project, days = interval.days(), "overlap");
                pairs.entry(pair.clone()).or_default().push(PairOverlap {
                    pair,
                    project: project.clone(),
                    interval,
                });
            }
        }
    }

    pairs
}

/// Merges each pair's overlaps into a single day count.
pub fn pair_totals(overlaps: BTreeMap<PairKey, Vec<PairOverlap>>) -> BTreeMap<PairKey, PairTotal> {
    overlaps
        .into_iter()
        .map(|(pair, records)| {
            let merged = merge(records.into_iter().map(|record| record.interval));
            debug!(
                pair = %pair,
                runs = merged.len(),
                total_days = merged.total_days(),
                "merged overlaps"
            );
            (pair.clone(), PairTotal { pair, merged })
        })
        .collect()
}

/// Returns the pair that spent the most days together.
///
/// Ties go to the pair with the smallest key. Returns `None` when
/// nobody worked together at all.
pub fn longest_collaboration(totals: &BTreeMap<PairKey, PairTotal>) -> Option<&PairTotal> {
    // Iteration is in ascending key order and only a strictly longer
    // total replaces the best so far.
    totals.values().fold(None, |best, candidate| match best {
        Some(best) if best.total_days() >= candidate.total_days() => Some(best),
        _ => Some(candidate),
    })
}

/// Everything computed from one roster, kept for reporting.
#[derive(Clone, Debug)]
pub struct Analysis {
    roster: Roster,
    overlaps: BTreeMap<PairKey, Vec<PairOverlap>>,
    totals: BTreeMap<PairKey, PairTotal>,
}

impl Analysis {
    pub fn run(roster: Roster) -> Self {
        let overlaps = pair_overlaps(&roster);
        let totals = pair_totals(overlaps.clone());
        info!(
            projects = roster.len(),
            assignments = roster.assignment_count(),
            pairs = totals.len(),
            "analysis complete"
        );
        Analysis {
            roster,
            overlaps,
            totals,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Per-project overlaps of every pair, before merging.
    pub fn overlaps(&self) -> &BTreeMap<PairKey, Vec<PairOverlap>> {
        &self.overlaps
    }

    pub fn totals(&self) -> &BTreeMap<PairKey, PairTotal> {
        &self.totals
    }

    pub fn longest(&self) -> Option<&PairTotal> {
        longest_collaboration(&self.totals)
    }
}
