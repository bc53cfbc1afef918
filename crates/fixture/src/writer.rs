//! Fixture stream output.

use std::io::{BufWriter, Write};

use crate::error::FixtureError;
use crate::record::FixtureRecord;

/// Writes one line per record to `writer` and returns the number of lines.
///
/// Lines end in `\n`. Output is buffered and flushed before returning.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] if writing or flushing fails.
pub fn write_fixtures<W, I>(writer: W, records: I) -> Result<u64, FixtureError>
where
    W: Write,
    I: IntoIterator<Item = FixtureRecord>,
{
    let mut out = BufWriter::new(writer);
    let mut count = 0u64;
    for record in records {
        writeln!(out, "{record}")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use datespan_calendar::Date;

    use super::*;
    use crate::range::DateRange;

    #[test]
    fn writes_lines_and_counts() {
        let range =
            DateRange::new(Date::constant(2000, 2, 28), Date::constant(2000, 3, 1)).unwrap();
        let mut buf = Vec::new();
        let count = write_fixtures(&mut buf, range.fixtures()).unwrap();
        assert_eq!(count, 3);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "2000-02-28 2000-02-28 P0D\n\
             2000-02-28 2000-02-29 P1D\n\
             2000-02-29 2000-02-29 P0D\n"
        );
    }

    #[test]
    fn empty_input_writes_nothing() {
        let mut buf = Vec::new();
        let count = write_fixtures(&mut buf, std::iter::empty()).unwrap();
        assert_eq!(count, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn io_error_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("broken pipe"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let range = DateRange::default();
        let err = write_fixtures(Broken, range.fixtures()).unwrap_err();
        assert!(matches!(err, FixtureError::Io(_)));
    }
}
