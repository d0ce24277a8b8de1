//! Source of "today" for highlighting and navigation.

use jiff::{civil::Date, Zoned};

/// Supplies the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> Date;
}

/// Reads the wall clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Zoned::now().date()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2024, 5, 17));
        assert_eq!(clock.today(), date(2024, 5, 17));
    }

    #[test]
    fn test_system_clock_is_plausible() {
        assert!(SystemClock.today().year() >= 2024);
    }
}
