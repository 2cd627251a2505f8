use std::collections::btree_map::{self, BTreeMap};

use crate::interval::DateInterval;
use crate::pair::{EmployeeId, ProjectId};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// One employee's tenure on one project.
///
/// The end date has already been resolved; an assignment that was still
/// running when the data was read ends on the day it was read.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Assignment {
    pub employee: EmployeeId,
    pub project: ProjectId,
    pub interval: DateInterval,
}

impl Assignment {
    pub fn new(
        employee: impl Into<EmployeeId>,
        project: impl Into<ProjectId>,
        interval: DateInterval,
    ) -> Self {
        Assignment {
            employee: employee.into(),
            project: project.into(),
            interval,
        }
    }
}

/// Assignments grouped by project.
///
/// Within a project, assignments keep the order they were added in.
#[derive(Clone, Default, Debug)]
pub struct Roster {
    projects: BTreeMap<ProjectId, Vec<Assignment>>,
}

impl Roster {
    /// Makes a new empty `Roster`.
    pub fn new() -> Self {
        Roster::default()
    }

    pub fn insert(&mut self, assignment: Assignment) {
        self.projects
            .entry(assignment.project.clone())
            .or_default()
            .push(assignment);
    }

    /// Returns the attendees of `project`, if anyone worked on it.
    pub fn get(&self, project: &ProjectId) -> Option<&[Assignment]> {
        self.projects.get(project).map(Vec::as_slice)
    }

    /// Gets an iterator over every project and its attendees,
    /// ordered by project id.
    pub fn projects(&self) -> impl Iterator<Item = (&ProjectId, &[Assignment])> {
        self.projects
            .iter()
            .map(|(project, attendees)| (project, attendees.as_slice()))
    }

    /// Number of distinct projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Total number of assignments across all projects.
    pub fn assignment_count(&self) -> usize {
        self.projects.values().map(Vec::len).sum()
    }
}

impl FromIterator<Assignment> for Roster {
    fn from_iter<T: IntoIterator<Item = Assignment>>(iter: T) -> Self {
        let mut roster = Roster::new();
        roster.extend(iter);
        roster
    }
}

impl Extend<Assignment> for Roster {
    fn extend<T: IntoIterator<Item = Assignment>>(&mut self, iter: T) {
        iter.into_iter().for_each(move |assignment| {
            self.insert(assignment);
        })
    }
}

impl IntoIterator for Roster {
    type Item = (ProjectId, Vec<Assignment>);
    type IntoIter = btree_map::IntoIter<ProjectId, Vec<Assignment>>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.into_iter()
    }
}
