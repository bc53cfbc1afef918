//! Pure conversion functions: TOML config structs and CLI strings -> crate API types.

use anyhow::{Context, Result};

use datespan_calendar::Date;
use datespan_fixture::DateRange;

use crate::cli::GenerateArgs;
use crate::config::DatespanConfig;

/// Parses a `YYYY-MM-DD` date, naming the setting it came from on failure.
pub fn parse_date(s: &str, what: &str) -> Result<Date> {
    s.parse::<Date>()
        .with_context(|| format!("invalid {what} date {s:?}"))
}

/// Resolves the fixture range, letting CLI flags override the config.
pub fn build_range(config: &DatespanConfig, args: &GenerateArgs) -> Result<DateRange> {
    let start = args.start.as_deref().unwrap_or(&config.range.start);
    let end = args.end.as_deref().unwrap_or(&config.range.end);
    let start = parse_date(start, "range start")?;
    let end = parse_date(end, "range end")?;
    DateRange::new(start, end).context("invalid fixture range")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(start: Option<&str>, end: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            config: None,
            output: None,
            start: start.map(str::to_string),
            end: end.map(str::to_string),
            parallel: false,
        }
    }

    #[test]
    fn defaults_give_default_range() {
        let range = build_range(&DatespanConfig::default(), &args(None, None)).unwrap();
        assert_eq!(range, DateRange::default());
    }

    #[test]
    fn cli_overrides_config() {
        let range = build_range(
            &DatespanConfig::default(),
            &args(Some("2000-02-01"), Some("2000-03-01")),
        )
        .unwrap();
        assert_eq!(range.start(), Date::constant(2000, 2, 1));
        assert_eq!(range.end(), Date::constant(2000, 3, 1));
        assert_eq!(range.len_days(), 29);
    }

    #[test]
    fn bad_date_names_setting() {
        let err = build_range(&DatespanConfig::default(), &args(Some("2000-02-30"), None))
            .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid range start date"), "{msg}");
        assert!(msg.contains("invalid day: 30"), "{msg}");
    }

    #[test]
    fn reversed_range_rejected() {
        let err = build_range(
            &DatespanConfig::default(),
            &args(Some("2002-01-01"), Some("1999-01-01")),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("start 2002-01-01 is after end 1999-01-01"));
    }
}
