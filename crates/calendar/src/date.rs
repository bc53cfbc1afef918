//! Proleptic Gregorian date value backed by `chrono::NaiveDate`.

use std::fmt;
use std::str::FromStr;

use chrono::format::{Parsed, StrftimeItems};
use chrono::{Datelike, Months, NaiveDate, TimeDelta};

use crate::error::CalendarError;
use crate::gregorian::{self, MAX_YEAR, MIN_YEAR};

/// Day zero of the epoch-day count.
const UNIX_EPOCH: NaiveDate = Date::constant(1970, 1, 1).inner;

/// A date in the proleptic Gregorian calendar.
///
/// Always valid: the year is in `-9999..=9999`, the month in `1..=12` and
/// the day within the month. Ordering is chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    inner: NaiveDate,
}

impl Date {
    /// The earliest supported date, `-9999-01-01`.
    pub const MIN: Date = Date::constant(MIN_YEAR, 1, 1);

    /// The latest supported date, `9999-12-31`.
    pub const MAX: Date = Date::constant(MAX_YEAR, 12, 31);

    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is outside `-9999..=9999`, the
    /// month is outside 1..=12, or the day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear {
                year: i64::from(year),
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(|inner| Self { inner })
            .ok_or_else(|| CalendarError::InvalidDay {
                day,
                year,
                month,
                max_day: gregorian::days_in_month(year, month),
            })
    }

    /// Creates a new `Date` in a `const` context.
    ///
    /// # Panics
    ///
    /// Panics when [`Date::new`] would return an error. In a `const` item
    /// this is a compile-time error.
    pub const fn constant(year: i32, month: u8, day: u8) -> Self {
        if year < MIN_YEAR || year > MAX_YEAR {
            panic!("invalid year");
        }
        if month < 1 || month > 12 {
            panic!("invalid month");
        }
        match NaiveDate::from_ymd_opt(year, month as u32, day as u32) {
            Some(inner) => Self { inner },
            None => panic!("invalid day"),
        }
    }

    /// Wraps a chrono date, rejecting years outside the supported range.
    fn from_naive(inner: NaiveDate) -> Option<Self> {
        (MIN_YEAR..=MAX_YEAR)
            .contains(&inner.year())
            .then_some(Self { inner })
    }

    /// Creates a `Date` from a count of days since 1970-01-01.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EpochDayOutOfRange`] if the day falls
    /// outside [`Date::MIN`]..=[`Date::MAX`].
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self, CalendarError> {
        TimeDelta::try_days(epoch_day)
            .and_then(|delta| UNIX_EPOCH.checked_add_signed(delta))
            .and_then(Self::from_naive)
            .ok_or(CalendarError::EpochDayOutOfRange { epoch_day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.inner.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.inner.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.inner.day() as u8
    }

    /// Returns `true` if this date's year is a leap year.
    pub fn is_leap_year(self) -> bool {
        gregorian::is_leap_year(self.year())
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        gregorian::days_in_month(self.year(), self.month())
    }

    /// Returns the number of days since 1970-01-01 (negative before it).
    pub fn to_epoch_day(self) -> i64 {
        self.inner.signed_duration_since(UNIX_EPOCH).num_days()
    }

    /// Returns the signed number of days from `self` to `other`.
    ///
    /// Positive when `other` is later than `self`.
    pub fn days_until(self, other: Date) -> i64 {
        other.inner.signed_duration_since(self.inner).num_days()
    }

    /// Adds a signed number of days.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EpochDayOutOfRange`] if the result would
    /// fall outside the supported range.
    pub fn checked_add_days(self, days: i64) -> Result<Self, CalendarError> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.inner.checked_add_signed(delta))
            .and_then(Self::from_naive)
            .ok_or_else(|| CalendarError::EpochDayOutOfRange {
                epoch_day: self.to_epoch_day().saturating_add(days),
            })
    }

    /// Adds a signed number of months.
    ///
    /// If the day does not exist in the target month, it is clamped to the
    /// last day of that month: `2000-01-31` plus one month is `2000-02-29`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if the target year is outside
    /// the supported range.
    pub fn checked_add_months(self, months: i64) -> Result<Self, CalendarError> {
        u32::try_from(months.unsigned_abs())
            .ok()
            .map(Months::new)
            .and_then(|step| {
                if months < 0 {
                    self.inner.checked_sub_months(step)
                } else {
                    self.inner.checked_add_months(step)
                }
            })
            .and_then(Self::from_naive)
            .ok_or_else(|| {
                let month_index = i64::from(self.year()) * 12 + i64::from(self.month()) - 1;
                CalendarError::InvalidYear {
                    year: month_index.saturating_add(months).div_euclid(12),
                    min: MIN_YEAR,
                    max: MAX_YEAR,
                }
            })
    }

    /// Adds a signed number of years, clamping Feb 29 to Feb 28 when the
    /// target year is not a leap year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if the target year is outside
    /// the supported range.
    pub fn checked_add_years(self, years: i64) -> Result<Self, CalendarError> {
        self.checked_add_months(years.saturating_mul(12))
    }

    /// Returns the following day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EpochDayOutOfRange`] for [`Date::MAX`].
    pub fn tomorrow(self) -> Result<Self, CalendarError> {
        self.inner
            .succ_opt()
            .and_then(Self::from_naive)
            .ok_or_else(|| CalendarError::EpochDayOutOfRange {
                epoch_day: self.to_epoch_day() + 1,
            })
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({})", self.inner)
    }
}

impl fmt::Display for Date {
    /// Formats as `YYYY-MM-DD`; years before 0 get a leading `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD` or `-YYYY-MM-DD`, with exactly four year digits.
    ///
    /// chrono's `%Y` and `%m` also accept shorter or signed fields, so the
    /// shape is checked before the fields are handed to chrono.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: String| CalendarError::Parse {
            input: s.to_string(),
            reason,
        };

        let body = s.strip_prefix('-').unwrap_or(s);
        let well_formed = body.len() == 10
            && body.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(parse_err("expected YYYY-MM-DD".to_string()));
        }

        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, s, StrftimeItems::new("%Y-%m-%d"))
            .map_err(|e| parse_err(e.to_string()))?;
        let (Some(year), Some(month), Some(day)) = (parsed.year(), parsed.month(), parsed.day())
        else {
            return Err(parse_err("missing date field".to_string()));
        };
        // chrono bounds month to 1..=12 and day to 1..=31.
        Date::new(year, month as u8, day as u8)
    }
}
