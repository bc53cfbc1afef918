//! Error types for datespan-fixture.

/// Error type for all fallible operations in the datespan-fixture crate.
///
/// Generation itself cannot fail once a [`crate::DateRange`] exists; these
/// errors come from building ranges, writing output, and reading fixture
/// files back.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Wraps an I/O error from the underlying reader or writer.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when a range's start is after its end.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// Requested first date.
        start: String,
        /// Requested exclusive end date.
        end: String,
    },

    /// Returned when a fixture line cannot be parsed.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number in the input.
        line: u64,
        /// What was wrong with the line.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_range() {
        let err = FixtureError::InvalidRange {
            start: "2002-01-01".to_string(),
            end: "1999-01-01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid range: start 2002-01-01 is after end 1999-01-01"
        );
    }

    #[test]
    fn display_parse() {
        let err = FixtureError::Parse {
            line: 17,
            reason: "expected 3 fields, got 2".to_string(),
        };
        assert_eq!(err.to_string(), "line 17: expected 3 fields, got 2");
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::other("disk full");
        let err: FixtureError = io_err.into();
        assert!(matches!(err, FixtureError::Io(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<FixtureError>();
    }
}
