//! Error types for datespan-period.

/// Error type for all fallible operations in the datespan-period crate.
///
/// Period calculation itself is total; these errors come from building a
/// `Period` out of caller-supplied parts or from parsing ISO-8601 text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Returned when a string is not an ISO-8601 `PnYnMnD` period.
    #[error("invalid period {input:?}: {reason}")]
    Parse {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Returned when the non-zero components do not share one sign.
    #[error("mixed signs in period: {years}Y {months}M {days}D")]
    MixedSigns {
        /// Years component.
        years: i32,
        /// Months component.
        months: i32,
        /// Days component.
        days: i32,
    },

    /// Returned when the months component is not normalized into years.
    #[error("months component {months} out of range (must be -11..=11)")]
    MonthsOutOfRange {
        /// The offending months component.
        months: i32,
    },
}
