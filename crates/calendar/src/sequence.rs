//! Contiguous date sequence generation.

use crate::date::Date;

/// Generates a contiguous sequence of dates.
///
/// Starting from `start`, produces up to `n_days` consecutive dates by
/// repeatedly advancing to the next day. Month, year, and leap-day
/// boundaries are handled by [`Date::tomorrow`]. The sequence stops early
/// if it reaches [`Date::MAX`].
///
/// # Example
///
/// ```ignore
/// let start = Date::constant(2000, 2, 28);
/// let dates = date_sequence(start, 3);
/// // Feb 28, Feb 29, Mar 1
/// ```
pub fn date_sequence(start: Date, n_days: usize) -> Vec<Date> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        match current.tomorrow() {
            Ok(next) => current = next,
            Err(_) => break,
        }
        dates.push(current);
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let dates = date_sequence(Date::constant(2000, 1, 1), 0);
        assert!(dates.is_empty());
    }

    #[test]
    fn single() {
        let start = Date::constant(2000, 6, 15);
        let dates = date_sequence(start, 1);
        assert_eq!(dates, vec![start]);
    }

    #[test]
    fn leap_year_is_366_days() {
        let dates = date_sequence(Date::constant(2000, 1, 1), 366);
        assert_eq!(dates.len(), 366);
        assert_eq!(*dates.last().unwrap(), Date::constant(2000, 12, 31));
    }

    #[test]
    fn leap_day_included() {
        let dates = date_sequence(Date::constant(2000, 2, 28), 3);
        assert_eq!(
            dates,
            vec![
                Date::constant(2000, 2, 28),
                Date::constant(2000, 2, 29),
                Date::constant(2000, 3, 1),
            ]
        );
    }

    #[test]
    fn year_transition() {
        let dates = date_sequence(Date::constant(1999, 12, 30), 4);
        assert_eq!(dates[1], Date::constant(1999, 12, 31));
        assert_eq!(dates[2], Date::constant(2000, 1, 1));
        assert_eq!(dates[3], Date::constant(2000, 1, 2));
    }

    #[test]
    fn stops_at_max() {
        let dates = date_sequence(Date::constant(9999, 12, 30), 5);
        assert_eq!(dates, vec![Date::constant(9999, 12, 30), Date::MAX]);
    }
}
