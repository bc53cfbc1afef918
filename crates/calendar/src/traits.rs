//! Trait boundary between calendar arithmetic and its consumers.

use std::fmt;

use crate::date::Date;
use crate::error::CalendarError;

/// The operations a period calculation needs from a calendar date.
///
/// Implementors must be valid proleptic Gregorian dates whose `Ord` is
/// chronological. Month addition must clamp the day to the end of the target
/// month rather than rolling over.
pub trait CalendarDate: Copy + Ord + fmt::Debug {
    /// Returns the year.
    fn year(self) -> i32;

    /// Returns the month (1..=12).
    fn month(self) -> u8;

    /// Returns the day within the month.
    fn day(self) -> u8;

    /// Returns the number of days in this date's month.
    fn days_in_month(self) -> u8;

    /// Adds a signed number of days.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the result is not representable.
    fn checked_add_days(self, days: i64) -> Result<Self, CalendarError>;

    /// Adds a signed number of months, clamping the day to the target
    /// month's length.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the result is not representable.
    fn checked_add_months(self, months: i64) -> Result<Self, CalendarError>;

    /// Returns the signed number of days from `self` to `other`.
    fn days_until(self, other: Self) -> i64;
}

impl CalendarDate for Date {
    fn year(self) -> i32 {
        Date::year(self)
    }

    fn month(self) -> u8 {
        Date::month(self)
    }

    fn day(self) -> u8 {
        Date::day(self)
    }

    fn days_in_month(self) -> u8 {
        Date::days_in_month(self)
    }

    fn checked_add_days(self, days: i64) -> Result<Self, CalendarError> {
        Date::checked_add_days(self, days)
    }

    fn checked_add_months(self, months: i64) -> Result<Self, CalendarError> {
        Date::checked_add_months(self, months)
    }

    fn days_until(self, other: Self) -> i64 {
        Date::days_until(self, other)
    }
}
