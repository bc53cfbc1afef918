//! Period calculation between two calendar dates.

use datespan_calendar::CalendarDate;

use crate::period::Period;

/// Computes the period from `start` to `end`.
///
/// The result is the largest whole number of months (split into years and
/// months) whose anniversary of `start`'s day-of-month is on or before `end`,
/// followed by the remaining days. A month counts only once `end`'s
/// day-of-month reaches `start`'s, so `2000-01-31` to `2000-02-29` is `P29D`
/// even though adding one month to Jan 31 clamps to Feb 29.
///
/// When `end` is before `start`, the period is computed for the swapped pair
/// and negated as a whole. The components are never negated one by one.
///
/// This function is total: every pair of valid dates has a period.
///
/// # Example
///
/// ```ignore
/// use datespan_calendar::Date;
/// use datespan_period::between;
///
/// let p = between(Date::constant(2000, 1, 31), Date::constant(2000, 3, 1));
/// assert_eq!(p.to_string(), "P1M1D");
///
/// let p = between(Date::constant(2001, 3, 1), Date::constant(2000, 1, 31));
/// assert_eq!(p.to_string(), "-P1Y1M1D");
/// ```
pub fn between<D: CalendarDate>(start: D, end: D) -> Period {
    if end < start {
        return -between(end, start);
    }

    let mut total_months = month_index(end) - month_index(start);
    let mut days = i64::from(end.day()) - i64::from(start.day());
    if total_months > 0 && days < 0 {
        // The last month is incomplete: count days from the previous anniversary.
        total_months -= 1;
        let anchor = start
            .checked_add_months(total_months)
            .expect("anchor lies between start and end");
        days = anchor.days_until(end);
    }

    let period = Period::from_months_and_days(total_months, days);
    debug_assert!(
        period.connects(start, end),
        "period {period} does not take {start:?} to {end:?}"
    );
    period
}

/// Months since year 0, January.
fn month_index<D: CalendarDate>(date: D) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month()) - 1
}
