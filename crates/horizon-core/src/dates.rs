//! Calendar helpers shared by the resolver, the layout engine and validation.
//!
//! All functions are pure. Dates are [`jiff::civil::Date`] values, so time of
//! day never takes part in a comparison.

use jiff::{civil::Date, ToSpan};

use crate::{
    error::{DateResultExt, HorizonError, Result},
    models::Quarter,
};

/// Canonical textual date format used for input and display (`23.01.2023`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Number of calendar days from `start` to `end`, counting both ends.
///
/// Equal dates yield 1. If `end` precedes `start` the result is zero or
/// negative.
pub fn days_between_inclusive(start: Date, end: Date) -> i32 {
    (end - start).get_days() + 1
}

/// Moves `date` by `days` (negative moves back).
pub fn add_days(date: Date, days: i64) -> Result<Date> {
    date.checked_add(days.days())
        .date_context("adding days left the supported calendar range")
}

/// First day of `quarter` in `year`.
pub fn quarter_start(year: i16, quarter: Quarter) -> Result<Date> {
    Date::new(year, quarter.first_month(), 1).date_context("quarter start is not a valid date")
}

/// Last day of `quarter` in `year`.
pub fn quarter_end(year: i16, quarter: Quarter) -> Result<Date> {
    Date::new(year, quarter.last_month(), 1)
        .map(|first| first.last_of_month())
        .date_context("quarter end is not a valid date")
}

/// January 1st of `year`.
pub fn year_start(year: i16) -> Result<Date> {
    Date::new(year, 1, 1).date_context("year start is not a valid date")
}

/// December 31st of `year`.
pub fn year_end(year: i16) -> Result<Date> {
    Date::new(year, 12, 31).date_context("year end is not a valid date")
}

/// The quarter `date` falls in.
pub fn quarter_of(date: Date) -> Quarter {
    Quarter::of_month(date.month())
}

/// The Monday of the week containing `date` (the date itself on Mondays).
pub fn monday_on_or_before(date: Date) -> Result<Date> {
    let offset = i64::from(date.weekday().to_monday_zero_offset());
    add_days(date, -offset)
}

/// ISO-8601 week number: week 1 is the week holding the year's first
/// Thursday.
pub fn iso_week(date: Date) -> i8 {
    date.iso_week_date().week()
}

/// Restricts `date` to `[start, end]`.
pub fn clamp(date: Date, start: Date, end: Date) -> Date {
    date.max(start).min(end)
}

/// Parses a `DD.MM.YYYY` date. Surrounding whitespace is ignored.
pub fn parse_date(input: &str) -> Result<Date> {
    let trimmed = input.trim();
    Date::strptime(DATE_FORMAT, trimmed).map_err(|e| {
        HorizonError::invalid_input("date")
            .with_reason(format!("'{trimmed}' is not a DD.MM.YYYY date: {e}"))
    })
}

/// Formats a date as `DD.MM.YYYY`.
pub fn format_date(date: Date) -> String {
    date.strftime(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_days_between_inclusive() {
        assert_eq!(days_between_inclusive(date(2024, 1, 1), date(2024, 1, 1)), 1);
        assert_eq!(days_between_inclusive(date(2024, 1, 1), date(2024, 1, 10)), 10);
        assert_eq!(days_between_inclusive(date(2024, 1, 1), date(2024, 3, 31)), 91);
        assert_eq!(days_between_inclusive(date(2023, 1, 1), date(2023, 3, 31)), 90);
        assert_eq!(days_between_inclusive(date(2023, 12, 15), date(2024, 1, 1)), 18);
    }

    #[test]
    fn test_quarter_bounds() {
        assert_eq!(quarter_start(2024, Quarter::Q1).unwrap(), date(2024, 1, 1));
        assert_eq!(quarter_end(2024, Quarter::Q1).unwrap(), date(2024, 3, 31));
        assert_eq!(quarter_start(2024, Quarter::Q2).unwrap(), date(2024, 4, 1));
        assert_eq!(quarter_end(2024, Quarter::Q2).unwrap(), date(2024, 6, 30));
        assert_eq!(quarter_end(2024, Quarter::Q3).unwrap(), date(2024, 9, 30));
        assert_eq!(quarter_end(2024, Quarter::Q4).unwrap(), date(2024, 12, 31));
    }

    #[test]
    fn test_quarter_of() {
        assert_eq!(quarter_of(date(2024, 3, 31)), Quarter::Q1);
        assert_eq!(quarter_of(date(2024, 4, 1)), Quarter::Q2);
        assert_eq!(quarter_of(date(2024, 12, 31)), Quarter::Q4);
    }

    #[test]
    fn test_monday_on_or_before() {
        // 2024-01-01 is a Monday
        assert_eq!(monday_on_or_before(date(2024, 1, 1)).unwrap(), date(2024, 1, 1));
        assert_eq!(monday_on_or_before(date(2024, 1, 7)).unwrap(), date(2024, 1, 1));
        // 2023-01-01 is a Sunday
        assert_eq!(monday_on_or_before(date(2023, 1, 1)).unwrap(), date(2022, 12, 26));
    }

    #[test]
    fn test_iso_week() {
        assert_eq!(iso_week(date(2024, 1, 1)), 1);
        // Belongs to the last week of 2022
        assert_eq!(iso_week(date(2023, 1, 1)), 52);
        assert_eq!(iso_week(date(2023, 1, 2)), 1);
        // 2020 has 53 ISO weeks
        assert_eq!(iso_week(date(2020, 12, 31)), 53);
        // 2024-12-30 already belongs to week 1 of 2025
        assert_eq!(iso_week(date(2024, 12, 30)), 1);
    }

    #[test]
    fn test_parse_format_round_trip() {
        for text in ["23.01.2023", "29.02.2024", "01.10.1999", "31.12.2030"] {
            let parsed = parse_date(text).unwrap();
            assert_eq!(format_date(parsed), text);
        }
        assert_eq!(parse_date("23.01.2023").unwrap(), date(2023, 1, 23));
        assert_eq!(parse_date("  05.06.2024 ").unwrap(), date(2024, 6, 5));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_date("").is_err());
        assert!(parse_date("2024-01-05").is_err());
        assert!(parse_date("30.02.2024").is_err());
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    fn test_clamp() {
        let start = date(2024, 1, 1);
        let end = date(2024, 3, 31);
        assert_eq!(clamp(date(2023, 12, 15), start, end), start);
        assert_eq!(clamp(date(2024, 2, 10), start, end), date(2024, 2, 10));
        assert_eq!(clamp(date(2024, 5, 1), start, end), end);
    }

    #[test]
    fn test_add_days_out_of_range() {
        assert!(add_days(date(9999, 12, 31), 1).is_err());
        assert_eq!(add_days(date(2024, 2, 28), 1).unwrap(), date(2024, 2, 29));
    }
}
