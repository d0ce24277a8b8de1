//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

use crate::dates;

/// A civil date rendered in the `DD.MM.YYYY` form used for task input.
///
/// ```rust
/// use horizon_core::display::DisplayDate;
/// use jiff::civil::date;
///
/// assert_eq!(DisplayDate(date(2024, 3, 5)).to_string(), "05.03.2024");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DisplayDate(pub Date);

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&dates::format_date(self.0))
    }
}

/// An inclusive date range, `DD.MM.YYYY to DD.MM.YYYY`.
#[derive(Debug, Clone, Copy)]
pub struct DateRange(pub Date, pub Date);

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", DisplayDate(self.0), DisplayDate(self.1))
    }
}
