//! Settings for reading assignments and rendering results.

use chrono::{Local, NaiveDate};

/// The single date representation accepted in input files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Marker written in place of an end date for assignments still running.
pub const DEFAULT_OPEN_MARKER: &str = "NULL";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable report.
    #[default]
    Text,
    /// Machine readable report.
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Skip the first non-blank line of input.
    pub header: bool,
    /// End-date values meaning "still running". Matched ignoring case.
    /// An empty end date always counts as open.
    pub open_markers: Vec<String>,
    /// Date that open assignments end on. `None` means the local date
    /// at the time the input is read.
    pub today: Option<NaiveDate>,
    pub format: OutputFormat,
    /// Only report the pair that spent the most time together.
    pub summary_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            header: false,
            open_markers: vec![DEFAULT_OPEN_MARKER.to_string()],
            today: None,
            format: OutputFormat::default(),
            summary_only: false,
        }
    }
}

impl Config {
    /// Resolves the date open assignments end on.
    ///
    /// Call this once per run and pass the result along, so a run that
    /// straddles midnight still sees a single "today".
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn is_open_marker(&self, value: &str) -> bool {
        value.is_empty()
            || self
                .open_markers
                .iter()
                .any(|marker| marker.eq_ignore_ascii_case(value))
    }
}
