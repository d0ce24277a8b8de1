//! Viewing window types: quarters, view modes and resolved periods.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{dates, error::HorizonError};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar quarter, 1 through 4 (Q1 = Jan–Mar, ..., Q4 = Oct–Dec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quarter(u8);

impl Quarter {
    pub const Q1: Quarter = Quarter(1);
    pub const Q2: Quarter = Quarter(2);
    pub const Q3: Quarter = Quarter(3);
    pub const Q4: Quarter = Quarter(4);

    /// Creates a quarter from its number.
    ///
    /// # Panics
    ///
    /// Panics if `number` is not in `1..=4`. Use [`Quarter::try_from`] for
    /// untrusted input.
    pub fn new(number: u8) -> Self {
        assert!(
            (1..=4).contains(&number),
            "quarter must be between 1 and 4, got {number}"
        );
        Self(number)
    }

    /// The quarter containing calendar month `month`.
    ///
    /// # Panics
    ///
    /// Panics if `month` is not in `1..=12`.
    pub fn of_month(month: i8) -> Self {
        assert!((1..=12).contains(&month), "month must be between 1 and 12, got {month}");
        Self(((month - 1) / 3 + 1) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// First calendar month (1-based) of the quarter.
    pub fn first_month(self) -> i8 {
        (self.0 as i8 - 1) * 3 + 1
    }

    /// Last calendar month (1-based) of the quarter.
    pub fn last_month(self) -> i8 {
        self.first_month() + 2
    }
}

impl TryFrom<u8> for Quarter {
    type Error = HorizonError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        if (1..=4).contains(&number) {
            Ok(Self(number))
        } else {
            Err(HorizonError::invalid_input("quarter")
                .with_reason(format!("must be between 1 and 4, got {number}")))
        }
    }
}

impl From<Quarter> for u8 {
    fn from(quarter: Quarter) -> Self {
        quarter.0
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// Whether the timeline shows a single quarter or a whole year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Quarter,
    Year,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quarter" | "q" => Ok(ViewMode::Quarter),
            "year" | "y" => Ok(ViewMode::Year),
            _ => Err(format!("Invalid view mode: {s}")),
        }
    }
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Quarter => "quarter",
            ViewMode::Year => "year",
        }
    }
}

/// The caller-selected viewing window before resolution into dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PeriodSelector {
    Quarter { year: i16, quarter: Quarter },
    Year { year: i16 },
}

impl PeriodSelector {
    pub fn year(&self) -> i16 {
        match *self {
            PeriodSelector::Quarter { year, .. } | PeriodSelector::Year { year } => year,
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            PeriodSelector::Quarter { .. } => ViewMode::Quarter,
            PeriodSelector::Year { .. } => ViewMode::Year,
        }
    }

    /// Short human label, e.g. `Q3 2024` or `2024`.
    pub fn label(&self) -> String {
        match self {
            PeriodSelector::Quarter { year, quarter } => format!("{quarter} {year}"),
            PeriodSelector::Year { year } => year.to_string(),
        }
    }
}

/// One calendar month column of a resolved period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    /// Month number, 1 = January
    pub number: i8,
    pub first_day: Date,
    pub day_count: i8,
    /// Whether today falls in this month
    pub is_current: bool,
}

impl Month {
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.number - 1) as usize]
    }

    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }
}

/// One Monday-to-Sunday week of a resolved period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// ISO-8601 week number
    pub number: i8,
    /// Monday of the week, possibly before the period start
    pub start: Date,
    /// Sunday of the week, possibly after the period end
    pub end: Date,
    /// Days of this week inside the period (1..=7)
    pub days_in_period: u8,
}

impl Week {
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A selector resolved into concrete dates and grid columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub selector: PeriodSelector,
    /// First day of the period (inclusive)
    pub start: Date,
    /// Last day of the period (inclusive)
    pub end: Date,
    pub months: Vec<Month>,
    pub weeks: Vec<Week>,
    /// Index into `weeks` of the week containing today
    pub current_week: Option<usize>,
    pub contains_today: bool,
}

impl Period {
    /// Number of days in the period, counting both ends.
    pub fn total_days(&self) -> i32 {
        dates::days_between_inclusive(self.start, self.end)
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn current_week(&self) -> Option<&Week> {
        self.current_week.and_then(|index| self.weeks.get(index))
    }

    pub fn label(&self) -> String {
        self.selector.label()
    }
}
