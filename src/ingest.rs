//! Reading assignments from comma-separated text.
//!
//! Each non-blank line holds `EmpID, ProjectID, DateFrom, DateTo`.
//! Dates use [`DATE_FORMAT`]; a `DateTo` matching one of the configured
//! open markers (or left empty) ends on the injected "today".

use std::io::BufRead;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::{Config, DATE_FORMAT};
use crate::interval::DateInterval;
use crate::roster::Assignment;

const FIELD_COUNT: usize = 4;

// Spreadsheet exports often start with one.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Which column of a row a problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Employee,
    Project,
    Start,
    End,
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Field::Employee => "EmpID",
            Field::Project => "ProjectID",
            Field::Start => "DateFrom",
            Field::End => "DateTo",
        })
    }
}

/// Ingestion errors. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected {expected} fields, found {found}", expected = FIELD_COUNT)]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: {field} is empty")]
    EmptyField { line: usize, field: Field },

    #[error("line {line}: {field} `{value}` is not a {format} date", format = DATE_FORMAT)]
    InvalidDate {
        line: usize,
        field: Field,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("line {line}: assignment ends on {end} before it starts on {start}")]
    EndBeforeStart {
        line: usize,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl IngestError {
    /// The input line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            IngestError::Read { line, .. }
            | IngestError::FieldCount { line, .. }
            | IngestError::EmptyField { line, .. }
            | IngestError::InvalidDate { line, .. }
            | IngestError::EndBeforeStart { line, .. } => *line,
        }
    }
}

fn parse_date(line: usize, field: Field, value: &str) -> Result<NaiveDate, IngestError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| IngestError::InvalidDate {
        line,
        field,
        value: value.to_string(),
        source,
    })
}

fn required(line: usize, field: Field, value: &str) -> Result<&str, IngestError> {
    if value.is_empty() {
        return Err(IngestError::EmptyField { line, field });
    }
    Ok(value)
}

/// Parses one row. Returns `Ok(None)` for blank lines.
pub fn parse_line(
    line_no: usize,
    line: &str,
    config: &Config,
    today: NaiveDate,
) -> Result<Option<Assignment>, IngestError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [employee, project, start, end] = fields[..] else {
        return Err(IngestError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    };

    let employee = required(line_no, Field::Employee, employee)?;
    let project = required(line_no, Field::Project, project)?;
    let start = parse_date(
        line_no,
        Field::Start,
        required(line_no, Field::Start, start)?,
    )?;
    let end = if config.is_open_marker(end) {
        trace!(line = line_no, %today, "open assignment");
        today
    } else {
        parse_date(line_no, Field::End, end)?
    };

    let interval = DateInterval::try_new(start, end).map_err(|_| IngestError::EndBeforeStart {
        line: line_no,
        start,
        end,
    })?;

    Ok(Some(Assignment::new(employee, project, interval)))
}

/// Parses every row of `reader`.
///
/// Open assignments end on `today`, which the caller resolves once
/// (normally through [`Config::today`]).
pub fn parse_assignments<R: BufRead>(
    reader: R,
    config: &Config,
    today: NaiveDate,
) -> Result<Vec<Assignment>, IngestError> {
    let mut assignments = Vec::new();
    let mut header_pending = config.header;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let mut line = line.map_err(|source| IngestError::Read {
            line: line_no,
            source,
        })?;
        if index == 0 && line.starts_with(BYTE_ORDER_MARK) {
            line.remove(0);
        }

        if header_pending && !line.trim().is_empty() {
            header_pending = false;
            debug!(line = line_no, "skipping header");
            continue;
        }

        if let Some(assignment) = parse_line(line_no, &line, config, today)? {
            assignments.push(assignment);
        }
    }

    debug!(assignments = assignments.len(), "parsed input");
    Ok(assignments)
}
