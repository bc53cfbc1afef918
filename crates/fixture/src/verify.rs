//! Replay a fixture stream through the period calculator.

use std::io::BufRead;

use datespan_calendar::Date;
use datespan_period::{Period, between};
use tracing::{debug, info};

use crate::error::FixtureError;
use crate::record::FixtureRecord;

/// A fixture line whose recorded period disagrees with [`between`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based line number.
    pub line: u64,
    /// Start date on the line.
    pub start: Date,
    /// End date on the line.
    pub end: Date,
    /// Period written in the fixture.
    pub recorded: Period,
    /// Period computed now.
    pub computed: Period,
}

/// Outcome of [`verify_fixtures`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    checked: u64,
    mismatches: Vec<Mismatch>,
    first_out_of_order: Option<u64>,
}

impl VerifyReport {
    /// Number of records read.
    pub fn checked(&self) -> u64 {
        self.checked
    }

    /// Lines whose period disagrees with the calculator, in file order.
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    /// First line whose `(start, end)` is not strictly after the previous
    /// line's, if any.
    pub fn first_out_of_order(&self) -> Option<u64> {
        self.first_out_of_order
    }

    /// Returns `true` if every period matched and the lines were in
    /// canonical order.
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.first_out_of_order.is_none()
    }
}

/// Reads fixture lines from `reader`, recomputes each period, and reports
/// disagreements.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] if reading fails, or
/// [`FixtureError::Parse`] for the first malformed line.
pub fn verify_fixtures<R: BufRead>(reader: R) -> Result<VerifyReport, FixtureError> {
    let mut report = VerifyReport::default();
    let mut previous: Option<(Date, Date)> = None;

    for (index, text) in reader.lines().enumerate() {
        let text = text?;
        let line = index as u64 + 1;
        let record = FixtureRecord::parse_line(line, &text)?;
        report.checked += 1;

        let key = (record.start(), record.end());
        if report.first_out_of_order.is_none() && previous.is_some_and(|prev| key <= prev) {
            debug!(line, "fixture line out of canonical order");
            report.first_out_of_order = Some(line);
        }
        previous = Some(key);

        let computed = between(record.start(), record.end());
        if computed != record.period() {
            debug!(
                line,
                start = %record.start(),
                end = %record.end(),
                recorded = %record.period(),
                computed = %computed,
                "period mismatch"
            );
            report.mismatches.push(Mismatch {
                line,
                start: record.start(),
                end: record.end(),
                recorded: record.period(),
                computed,
            });
        }
    }

    info!(
        checked = report.checked,
        mismatches = report.mismatches.len(),
        "fixture verification finished"
    );
    Ok(report)
}
