//! The `Period` value type and its ISO-8601 text form.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use datespan_calendar::{CalendarDate, CalendarError};

use crate::error::PeriodError;

/// Whether a period points forwards or backwards in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// End is on or after start. The zero period is non-negative.
    NonNegative,
    /// End is before start.
    Negative,
}

/// A calendar distance of whole years, months and days.
///
/// All non-zero components share one sign and `months` is always in
/// `-11..=11`. Ordering is lexicographic on `(years, months, days)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    /// The empty period, printed as `P0D`.
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Creates a period from its components.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::MixedSigns`] if the non-zero components
    /// disagree in sign, or [`PeriodError::MonthsOutOfRange`] if `months` is
    /// outside `-11..=11`.
    pub fn new(years: i32, months: i32, days: i32) -> Result<Self, PeriodError> {
        let has_positive = years > 0 || months > 0 || days > 0;
        let has_negative = years < 0 || months < 0 || days < 0;
        if has_positive && has_negative {
            return Err(PeriodError::MixedSigns {
                years,
                months,
                days,
            });
        }
        if !(-11..=11).contains(&months) {
            return Err(PeriodError::MonthsOutOfRange { months });
        }
        Ok(Self {
            years,
            months,
            days,
        })
    }

    /// Builds a non-negative period from a month count and a day remainder.
    ///
    /// Both inputs come from dates in the supported year range, so they fit
    /// in `i32`.
    pub(crate) fn from_months_and_days(total_months: i64, days: i64) -> Self {
        debug_assert!(total_months >= 0 && days >= 0);
        Self {
            years: (total_months / 12) as i32,
            months: (total_months % 12) as i32,
            days: days as i32,
        }
    }

    /// Returns the years component.
    pub fn years(self) -> i32 {
        self.years
    }

    /// Returns the months component (`-11..=11`).
    pub fn months(self) -> i32 {
        self.months
    }

    /// Returns the days component.
    pub fn days(self) -> i32 {
        self.days
    }

    /// Returns `years * 12 + months`.
    pub fn total_months(self) -> i64 {
        i64::from(self.years) * 12 + i64::from(self.months)
    }

    /// Returns the overall sign.
    pub fn sign(self) -> Sign {
        if self.is_negative() {
            Sign::Negative
        } else {
            Sign::NonNegative
        }
    }

    /// Returns `true` for `P0D`.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Returns `true` if any component is negative.
    pub fn is_negative(self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Returns the period with every component made non-negative.
    pub fn abs(self) -> Self {
        if self.is_negative() { -self } else { self }
    }

    /// Applies this period to `date`.
    ///
    /// Adds `total_months()` months in one step, clamping the day to the end
    /// of the target month, then adds `days`. A single month step matters
    /// for a Feb 29 start: adding a year and then a month would clamp twice.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the result is not representable.
    pub fn checked_add_to<D: CalendarDate>(self, date: D) -> Result<D, CalendarError> {
        date.checked_add_months(self.total_months())?
            .checked_add_days(i64::from(self.days))
    }

    /// Returns `true` if this period describes the distance from `start` to
    /// `end`.
    ///
    /// A non-negative period must take `start` to `end`. A negative period
    /// was computed from the swapped pair, so its magnitude must take `end`
    /// back to `start`.
    pub fn connects<D: CalendarDate>(self, start: D, end: D) -> bool {
        match self.sign() {
            Sign::NonNegative => start <= end && self.checked_add_to(start) == Ok(end),
            Sign::Negative => end < start && (-self).checked_add_to(end) == Ok(start),
        }
    }
}

impl Neg for Period {
    type Output = Period;

    fn neg(self) -> Period {
        Period {
            years: -self.years,
            months: -self.months,
            days: -self.days,
        }
    }
}

impl fmt::Display for Period {
    /// Formats as ISO-8601 `PnYnMnD`, omitting zero components.
    ///
    /// The zero period is `P0D`. A negative period carries one leading `-`
    /// instead of per-component signs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        let magnitude = self.abs();
        if self.is_negative() {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if magnitude.years != 0 {
            write!(f, "{}Y", magnitude.years)?;
        }
        if magnitude.months != 0 {
            write!(f, "{}M", magnitude.months)?;
        }
        if magnitude.days != 0 {
            write!(f, "{}D", magnitude.days)?;
        }
        Ok(())
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: String| PeriodError::Parse {
            input: s.to_string(),
            reason,
        };

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let Some(mut rest) = rest.strip_prefix('P') else {
            return Err(parse_err("expected leading 'P'".to_string()));
        };
        if rest.is_empty() {
            return Err(parse_err("expected at least one component".to_string()));
        }

        // Designators must appear in this order, each at most once.
        let mut components = [0i32; 3];
        let mut next_slot = 0;
        while !rest.is_empty() {
            let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits_len == 0 {
                return Err(parse_err(format!("expected digits at {rest:?}")));
            }
            let (digits, tail) = rest.split_at(digits_len);
            let Some(designator) = tail.chars().next() else {
                return Err(parse_err(format!("missing designator after {digits}")));
            };
            let slot = match designator {
                'Y' => 0,
                'M' => 1,
                'D' => 2,
                other => return Err(parse_err(format!("unknown designator {other:?}"))),
            };
            if slot < next_slot {
                return Err(parse_err(format!("designator {designator:?} out of order")));
            }
            components[slot] = digits
                .parse()
                .map_err(|_| parse_err(format!("component {digits} too large")))?;
            next_slot = slot + 1;
            rest = &tail[designator.len_utf8()..];
        }

        let [years, months, days] = components;
        let period = Period::new(years, months, days)?;
        Ok(if negative { -period } else { period })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(years: i32, months: i32, days: i32) -> Period {
        Period::new(years, months, days).unwrap()
    }

    #[test]
    fn new_rejects_mixed_signs() {
        assert_eq!(
            Period::new(1, -1, 0).unwrap_err(),
            PeriodError::MixedSigns {
                years: 1,
                months: -1,
                days: 0,
            }
        );
        assert!(Period::new(0, 2, -3).is_err());
    }

    #[test]
    fn new_rejects_unnormalized_months() {
        assert_eq!(
            Period::new(0, 12, 0).unwrap_err(),
            PeriodError::MonthsOutOfRange { months: 12 }
        );
        assert!(Period::new(-1, -12, 0).is_err());
        assert!(Period::new(0, 11, 0).is_ok());
    }

    #[test]
    fn sign_and_zero() {
        assert_eq!(Period::ZERO.sign(), Sign::NonNegative);
        assert!(Period::ZERO.is_zero());
        assert_eq!(p(0, 0, 1).sign(), Sign::NonNegative);
        assert_eq!(p(0, 0, -1).sign(), Sign::Negative);
        assert!(!p(0, 0, -1).is_zero());
    }

    #[test]
    fn negation_flips_every_component() {
        let period = p(1, 2, 3);
        assert_eq!(-period, p(-1, -2, -3));
        assert_eq!(-(-period), period);
        assert_eq!((-period).abs(), period);
        assert_eq!(-Period::ZERO, Period::ZERO);
    }

    #[test]
    fn total_months() {
        assert_eq!(p(1, 2, 3).total_months(), 14);
        assert_eq!(p(-2, -11, 0).total_months(), -35);
    }

    #[test]
    fn display_omits_zero_components() {
        assert_eq!(Period::ZERO.to_string(), "P0D");
        assert_eq!(p(0, 1, 0).to_string(), "P1M");
        assert_eq!(p(1, 0, 0).to_string(), "P1Y");
        assert_eq!(p(0, 0, 30).to_string(), "P30D");
        assert_eq!(p(0, 11, 30).to_string(), "P11M30D");
        assert_eq!(p(2, 0, 5).to_string(), "P2Y5D");
        assert_eq!(p(1, 2, 3).to_string(), "P1Y2M3D");
    }

    #[test]
    fn display_negative_uses_single_prefix() {
        assert_eq!(p(-1, -1, -1).to_string(), "-P1Y1M1D");
        assert_eq!(p(0, 0, -7).to_string(), "-P7D");
    }

    #[test]
    fn parse_valid() {
        assert_eq!("P0D".parse::<Period>().unwrap(), Period::ZERO);
        assert_eq!("P1M".parse::<Period>().unwrap(), p(0, 1, 0));
        assert_eq!("P2Y5D".parse::<Period>().unwrap(), p(2, 0, 5));
        assert_eq!("-P1Y1M1D".parse::<Period>().unwrap(), p(-1, -1, -1));
        assert_eq!("P0Y0M0D".parse::<Period>().unwrap(), Period::ZERO);
    }

    #[test]
    fn parse_display_agree() {
        for period in [Period::ZERO, p(0, 11, 30), p(3, 0, 0), p(-2, -3, -4)] {
            assert_eq!(period.to_string().parse::<Period>().unwrap(), period);
        }
    }

    #[test]
    fn parse_rejects_malformed() {
        for input in ["", "P", "1Y", "PY", "P1", "P1X", "P1D1M", "P1M1M", "P-1D", "+P1D", "P1Y "] {
            assert!(
                matches!(input.parse::<Period>(), Err(PeriodError::Parse { .. })),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn parse_rejects_unnormalized() {
        assert_eq!(
            "P13M".parse::<Period>().unwrap_err(),
            PeriodError::MonthsOutOfRange { months: 13 }
        );
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(p(0, 0, 30) < p(0, 1, 0));
        assert!(p(0, 11, 30) < p(1, 0, 0));
        assert!(p(1, 0, 0) < p(1, 0, 1));
    }
}
