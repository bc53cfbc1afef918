//! Half-open date ranges.

use datespan_calendar::Date;

use crate::error::FixtureError;

/// First date of the default fixture range.
pub const DEFAULT_START: Date = Date::constant(1999, 1, 1);

/// Exclusive end of the default fixture range.
///
/// Three full years: one leap year, two common years, every month length.
pub const DEFAULT_END: Date = Date::constant(2002, 1, 1);

/// A half-open range of dates `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl Default for DateRange {
    /// Returns `[1999-01-01, 2002-01-01)`.
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

impl DateRange {
    /// Creates the range `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidRange`] if `start` is after `end`.
    /// Equal bounds give an empty range.
    pub fn new(start: Date, end: Date) -> Result<Self, FixtureError> {
        if start > end {
            return Err(FixtureError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the first date in the range.
    pub fn start(self) -> Date {
        self.start
    }

    /// Returns the exclusive end of the range.
    pub fn end(self) -> Date {
        self.end
    }

    /// Returns `true` if the range holds no dates.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns the number of dates in the range.
    pub fn len_days(self) -> u64 {
        // start <= end, so this is non-negative.
        self.start.days_until(self.end) as u64
    }

    /// Returns the number of `(d1, d2)` pairs with `d1 <= d2`, which is the
    /// number of fixture records the range produces.
    pub fn pair_count(self) -> u64 {
        let n = self.len_days();
        n * (n + 1) / 2
    }

    /// Returns the sub-range `[start, self.end)`, with `start` clamped into
    /// this range's bounds.
    pub(crate) fn starting_at(self, start: Date) -> Self {
        Self {
            start: start.clamp(self.start, self.end),
            end: self.end,
        }
    }

    /// Returns an iterator over every date in the range, ascending.
    pub fn dates(self) -> Dates {
        Dates {
            next: (!self.is_empty()).then_some(self.start),
            end: self.end,
        }
    }
}

/// Iterator over the dates of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Dates {
    next: Option<Date>,
    end: Date,
}

impl Iterator for Dates {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        // `end` is a valid date after `current`, so tomorrow exists.
        self.next = current.tomorrow().ok().filter(|next| *next < self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |next| next.days_until(self.end) as usize);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Dates {}

impl std::iter::FusedIterator for Dates {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three_years() {
        let range = DateRange::default();
        assert_eq!(range.start(), Date::constant(1999, 1, 1));
        assert_eq!(range.end(), Date::constant(2002, 1, 1));
        assert_eq!(range.len_days(), 1096);
        assert_eq!(range.pair_count(), 601_156);
    }

    #[test]
    fn new_rejects_reversed_bounds() {
        let err = DateRange::new(DEFAULT_END, DEFAULT_START).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidRange { .. }));
    }

    #[test]
    fn empty_range() {
        let range = DateRange::new(DEFAULT_START, DEFAULT_START).unwrap();
        assert!(range.is_empty());
        assert_eq!(range.len_days(), 0);
        assert_eq!(range.pair_count(), 0);
        assert_eq!(range.dates().count(), 0);
    }

    #[test]
    fn dates_exact_size() {
        let range =
            DateRange::new(Date::constant(2000, 2, 27), Date::constant(2000, 3, 2)).unwrap();
        let dates = range.dates();
        assert_eq!(dates.len(), 4);
        assert_eq!(
            dates.collect::<Vec<_>>(),
            vec![
                Date::constant(2000, 2, 27),
                Date::constant(2000, 2, 28),
                Date::constant(2000, 2, 29),
                Date::constant(2000, 3, 1),
            ]
        );
    }

    #[test]
    fn range_ending_at_max() {
        let range = DateRange::new(Date::constant(9999, 12, 30), Date::MAX).unwrap();
        assert_eq!(range.dates().collect::<Vec<_>>(), vec![Date::constant(9999, 12, 30)]);
    }
}
