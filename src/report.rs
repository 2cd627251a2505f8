//! Rendering an [`Analysis`] for people and for machines.

use core::fmt::{self, Display};

use crate::analysis::{Analysis, PairTotal};

/// The full human readable report: attendees per project, overlaps per
/// pair, merged totals per pair, then the pair that spent the most time
/// together.
pub struct TextReport<'a>(pub &'a Analysis);

/// Just the final line of [`TextReport`].
pub struct Summary<'a>(pub Option<&'a PairTotal>);

impl Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;

        for (project, attendees) in analysis.roster().projects() {
            write!(f, "Project ID {project}")?;
            for attendee in attendees {
                write!(
                    f,
                    "\t[{}, {}]",
                    attendee.employee, attendee.interval
                )?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        for (pair, overlaps) in analysis.overlaps() {
            write!(f, "Employee pair {pair}")?;
            for overlap in overlaps {
                write!(
                    f,
                    "\t[{}, {}, {}]",
                    overlap.project,
                    overlap.interval,
                    overlap.days()
                )?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        for (pair, total) in analysis.totals() {
            writeln!(
                f,
                "Employee pair {pair}\t Total days worked together: {}",
                total.total_days()
            )?;
        }

        writeln!(f)?;
        write!(f, "{}", Summary(analysis.longest()))
    }
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(longest) => writeln!(
                f,
                "The employees with ids {} have worked the most time together, {} days in total",
                longest.pair,
                longest.total_days()
            ),
            None => writeln!(f, "No employees have worked together"),
        }
    }
}

#[cfg(feature = "serde1")]
mod json {
    use serde::Serialize;

    use crate::analysis::{Analysis, PairTotal};

    #[derive(Serialize)]
    struct JsonReport<'a> {
        totals: Vec<&'a PairTotal>,
        longest: Option<&'a PairTotal>,
    }

    #[derive(Serialize)]
    struct JsonSummary<'a> {
        longest: Option<&'a PairTotal>,
    }

    /// Renders the merged totals of every pair and the longest pair.
    pub fn to_json(analysis: &Analysis, summary_only: bool) -> serde_json::Result<String> {
        if summary_only {
            return serde_json::to_string_pretty(&JsonSummary {
                longest: analysis.longest(),
            });
        }
        serde_json::to_string_pretty(&JsonReport {
            totals: analysis.totals().values().collect(),
            longest: analysis.longest(),
        })
    }
}

#[cfg(feature = "serde1")]
pub use json::to_json;
