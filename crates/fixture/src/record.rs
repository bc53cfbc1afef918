//! One fixture line: two dates and the period between them.

use std::fmt;

use datespan_calendar::Date;
use datespan_period::{Period, between};

use crate::error::FixtureError;

/// An observed `(start, end, period)` triple.
///
/// Formats as `<start> <end> <period>` with single spaces, for example
/// `2000-01-31 2000-03-01 P1M1D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixtureRecord {
    start: Date,
    end: Date,
    period: Period,
}

impl FixtureRecord {
    /// Creates a record by computing the period from `start` to `end`.
    pub fn compute(start: Date, end: Date) -> Self {
        Self {
            start,
            end,
            period: between(start, end),
        }
    }

    /// Returns the start date.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the end date.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns the recorded period.
    pub fn period(&self) -> Period {
        self.period
    }

    /// Parses one fixture line. `line` is the 1-based line number used in
    /// error messages.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Parse`] if the line does not have exactly
    /// three single-space separated fields, or any field is malformed.
    pub fn parse_line(line: u64, text: &str) -> Result<Self, FixtureError> {
        let fields: Vec<&str> = text.split(' ').collect();
        let &[start, end, period] = fields.as_slice() else {
            return Err(FixtureError::Parse {
                line,
                reason: format!("expected 3 fields, got {}", fields.len()),
            });
        };
        let parse_err = |reason: String| FixtureError::Parse { line, reason };
        let start: Date = start.parse().map_err(|e| parse_err(format!("start date: {e}")))?;
        let end: Date = end.parse().map_err(|e| parse_err(format!("end date: {e}")))?;
        let period: Period = period.parse().map_err(|e| parse_err(format!("period: {e}")))?;
        Ok(Self { start, end, period })
    }
}

impl fmt::Display for FixtureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.start, self.end, self.period)
    }
}
