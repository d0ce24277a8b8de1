//! Display implementations for domain models.
//!
//! Markdown output for the terminal. The compact forms used inside the
//! timeline chart live in [`super::chart`].

use std::fmt;

use super::datetime::DateRange;
use crate::{
    dates,
    models::{Period, Task, ViewMode},
};

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = dates::days_between_inclusive(self.start_date, self.end_date);
        writeln!(f, "### {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Dates: {} ({days} {})",
            DateRange(self.start_date, self.end_date),
            if days == 1 { "day" } else { "days" }
        )?;
        writeln!(f, "- Color: {}", self.color)?;
        writeln!(f)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} days)",
            self.label(),
            DateRange(self.start, self.end),
            self.total_days()
        )
    }
}
