//! Resolves a [`PeriodSelector`] into dates, month columns and week columns.

use jiff::civil::Date;

use crate::{
    dates,
    error::{DateResultExt, Result},
    models::{Month, Period, PeriodSelector, Week},
};

/// Resolves `selector` into a [`Period`], marking the month and week that
/// contain `today`.
///
/// # Errors
///
/// Returns `HorizonError::DateOutOfRange` when the period or its weeks would
/// leave the supported calendar range (years near ±9999).
pub fn resolve_period(selector: PeriodSelector, today: Date) -> Result<Period> {
    let (start, end) = match selector {
        PeriodSelector::Quarter { year, quarter } => (
            dates::quarter_start(year, quarter)?,
            dates::quarter_end(year, quarter)?,
        ),
        PeriodSelector::Year { year } => (dates::year_start(year)?, dates::year_end(year)?),
    };

    let months = build_months(start, end, today)?;
    let weeks = build_weeks(start, end)?;
    let current_week = weeks.iter().position(|week| week.contains(today));

    Ok(Period {
        selector,
        start,
        end,
        months,
        weeks,
        current_week,
        contains_today: start <= today && today <= end,
    })
}

fn build_months(start: Date, end: Date, today: Date) -> Result<Vec<Month>> {
    (start.month()..=end.month())
        .map(|number| {
            let first_day = Date::new(start.year(), number, 1)
                .date_context("month start is not a valid date")?;
            Ok(Month {
                number,
                first_day,
                day_count: first_day.days_in_month(),
                is_current: today.year() == first_day.year() && today.month() == number,
            })
        })
        .collect()
}

fn build_weeks(start: Date, end: Date) -> Result<Vec<Week>> {
    let mut weeks = Vec::new();
    let mut week_start = dates::monday_on_or_before(start)?;

    while week_start <= end {
        let week_end = dates::add_days(week_start, 6)?;
        let visible_start = week_start.max(start);
        let visible_end = week_end.min(end);
        weeks.push(Week {
            number: dates::iso_week(week_start),
            start: week_start,
            end: week_end,
            days_in_period: dates::days_between_inclusive(visible_start, visible_end) as u8,
        });
        week_start = dates::add_days(week_start, 7)?;
    }

    Ok(weeks)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Quarter;

    fn quarter(year: i16, q: u8) -> PeriodSelector {
        PeriodSelector::Quarter {
            year,
            quarter: Quarter::new(q),
        }
    }

    #[test]
    fn test_quarter_boundaries_all_quarters() {
        let today = date(2024, 6, 1);
        for year in [2023, 2024, 2100] {
            for q in 1..=4u8 {
                let period = resolve_period(quarter(year, q), today).unwrap();
                let first_month = (q as i8 - 1) * 3 + 1;
                assert_eq!(period.start, date(year, first_month, 1));
                assert_eq!(period.end, date(year, first_month + 2, 1).last_of_month());
                assert_eq!(period.months.len(), 3);
            }
        }
    }

    #[test]
    fn test_leap_year_february() {
        let today = date(2024, 6, 1);
        let q1_2023 = resolve_period(quarter(2023, 1), today).unwrap();
        let q1_2024 = resolve_period(quarter(2024, 1), today).unwrap();

        assert_eq!(q1_2023.months[1].day_count, 28);
        assert_eq!(q1_2024.months[1].day_count, 29);
        assert_eq!(q1_2024.end, date(2024, 3, 31));
        assert_eq!(q1_2023.total_days(), 90);
        assert_eq!(q1_2024.total_days(), 91);
    }

    #[test]
    fn test_year_mode() {
        let period = resolve_period(PeriodSelector::Year { year: 2024 }, date(2024, 6, 1)).unwrap();

        assert_eq!(period.start, date(2024, 1, 1));
        assert_eq!(period.end, date(2024, 12, 31));
        assert_eq!(period.months.len(), 12);
        let numbers: Vec<i8> = period.months.iter().map(|m| m.number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<i8>>());
        assert_eq!(period.total_days(), 366);
    }

    #[test]
    fn test_weeks_start_on_monday_before_period() {
        // 2023-01-01 is a Sunday, so the first week begins 2022-12-26
        let period = resolve_period(quarter(2023, 1), date(2023, 2, 1)).unwrap();
        let first = &period.weeks[0];

        assert_eq!(first.start, date(2022, 12, 26));
        assert_eq!(first.end, date(2023, 1, 1));
        assert_eq!(first.days_in_period, 1);
        assert_eq!(first.number, 52);
        assert_eq!(period.weeks[1].number, 1);
    }

    #[test]
    fn test_week_days_cover_period() {
        for q in 1..=4u8 {
            let period = resolve_period(quarter(2024, q), date(2024, 1, 1)).unwrap();
            let covered: i32 = period
                .weeks
                .iter()
                .map(|week| i32::from(week.days_in_period))
                .sum();
            assert_eq!(covered, period.total_days());
            assert!(period
                .weeks
                .iter()
                .all(|week| (1..=7).contains(&week.days_in_period)));
            assert!(period.weeks.last().unwrap().end >= period.end);
        }
    }

    #[test]
    fn test_last_week_is_clipped() {
        // 2024-03-31 is a Sunday, 2024-06-30 is a Sunday, 2024-09-30 a Monday
        let q3 = resolve_period(quarter(2024, 3), date(2024, 1, 1)).unwrap();
        let last = q3.weeks.last().unwrap();
        assert_eq!(last.start, date(2024, 9, 30));
        assert_eq!(last.days_in_period, 1);
    }

    #[test]
    fn test_current_week_and_month() {
        let today = date(2024, 2, 14);
        let period = resolve_period(quarter(2024, 1), today).unwrap();

        assert!(period.contains_today);
        let week = period.current_week().expect("current week");
        assert!(week.contains(today));
        assert_eq!(week.number, 7);
        let current: Vec<i8> = period
            .months
            .iter()
            .filter(|m| m.is_current)
            .map(|m| m.number)
            .collect();
        assert_eq!(current, vec![2]);

        let elsewhere = resolve_period(quarter(2024, 3), today).unwrap();
        assert!(!elsewhere.contains_today);
        assert_eq!(elsewhere.current_week, None);
        assert!(elsewhere.months.iter().all(|m| !m.is_current));
    }

    #[test]
    fn test_current_week_in_partial_first_week() {
        // Today is before the quarter but in the same Monday-Sunday week
        let period = resolve_period(quarter(2023, 1), date(2022, 12, 28)).unwrap();
        assert_eq!(period.current_week, Some(0));
        assert!(!period.contains_today);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let today = date(2024, 5, 5);
        assert_eq!(
            resolve_period(quarter(2024, 2), today).unwrap(),
            resolve_period(quarter(2024, 2), today).unwrap()
        );
    }

    #[test]
    fn test_out_of_range_year_is_error() {
        let result = resolve_period(quarter(9999, 4), date(2024, 1, 1));
        assert!(result.is_err());
    }
}
