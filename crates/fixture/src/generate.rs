//! Lazy, ordered enumeration of every fixture pair in a range.

use datespan_calendar::Date;
use tracing::trace;

use crate::range::DateRange;
use crate::record::FixtureRecord;

/// Iterator over the fixture records of a [`DateRange`].
///
/// Yields `(d1, d2)` for every `d1` in the range, ascending, and for each
/// `d1` every `d2` from `d1` up to the end of the range, ascending. Created
/// by [`DateRange::fixtures`]. Holds no state besides its position, so
/// calling `fixtures()` again restarts the sequence.
#[derive(Debug, Clone)]
pub struct Fixtures {
    end: Date,
    outer: Option<Date>,
    inner: Option<Date>,
}

impl DateRange {
    /// Returns the fixture records for every ordered pair in this range.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let range = DateRange::new(Date::constant(1999, 1, 1), Date::constant(1999, 1, 3))?;
    /// let lines: Vec<String> = range.fixtures().map(|r| r.to_string()).collect();
    /// // 1999-01-01 1999-01-01 P0D
    /// // 1999-01-01 1999-01-02 P1D
    /// // 1999-01-02 1999-01-02 P0D
    /// ```
    pub fn fixtures(self) -> Fixtures {
        let first = (!self.is_empty()).then_some(self.start());
        Fixtures {
            end: self.end(),
            outer: first,
            inner: first,
        }
    }
}

impl Fixtures {
    fn step(&self, date: Date) -> Option<Date> {
        date.tomorrow().ok().filter(|next| *next < self.end)
    }
}

impl Iterator for Fixtures {
    type Item = FixtureRecord;

    fn next(&mut self) -> Option<FixtureRecord> {
        loop {
            let d1 = self.outer?;
            if let Some(d2) = self.inner {
                self.inner = self.step(d2);
                return Some(FixtureRecord::compute(d1, d2));
            }
            self.outer = self.step(d1);
            self.inner = self.outer;
            if let Some(next) = self.outer {
                trace!(d1 = %next, "starting fixture row");
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(d1) = self.outer else {
            return (0, Some(0));
        };
        let in_row = self.inner.map_or(0, |d2| d2.days_until(self.end));
        let later_rows = (d1.days_until(self.end) - 1).max(0);
        let remaining = (in_row + later_rows * (later_rows + 1) / 2) as usize;
        (remaining, Some(remaining))
    }
}

impl std::iter::FusedIterator for Fixtures {}
