//! Error types for the datespan-calendar crate.

/// Error type for all fallible operations in the datespan-calendar crate.
///
/// This enum covers validation failures for year, month and day values,
/// arithmetic that would leave the supported year range, and malformed
/// `YYYY-MM-DD` input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year is outside the supported range.
    #[error("invalid year: {year} (must be {min}..={max})")]
    InvalidYear {
        /// The invalid year that was provided or computed.
        year: i64,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year:04}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The year the month belongs to.
        year: i32,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when an epoch day does not map to a supported date.
    #[error("epoch day {epoch_day} is outside the supported date range")]
    EpochDayOutOfRange {
        /// The offending day count since 1970-01-01.
        epoch_day: i64,
    },

    /// Returned when a string is not a `YYYY-MM-DD` date.
    #[error("invalid date {input:?}: {reason}")]
    Parse {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}
