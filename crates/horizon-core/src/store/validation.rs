//! Field-level validation of task input.
//!
//! All checks run and every failing field gets a message, so a form can show
//! every problem at once.

use jiff::{civil::Date, ToSpan};

use crate::{
    config::ValidationConfig,
    dates,
    error::{Field, HorizonError, Result, ValidationErrors},
};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

/// Unvalidated task fields, borrowed from create or merged update input.
#[derive(Debug, Clone, Copy)]
pub struct TaskDraft<'a> {
    pub name: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub color: Option<&'a str>,
}

/// Task fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTask {
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub color: Option<String>,
}

/// Which dates the past/future window applies to.
///
/// New tasks check both. An update only checks the dates it changes, so a
/// task that has drifted out of the window can still be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowChecks {
    pub start: bool,
    pub end: bool,
}

impl WindowChecks {
    pub const ALL: Self = Self {
        start: true,
        end: true,
    };
}

/// Checks drafts against naming, date and color rules.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates `draft` with `today` as the reference for the date window.
    ///
    /// # Errors
    ///
    /// Returns `HorizonError::Validation` carrying one message per failing
    /// field.
    pub fn validate(&self, draft: &TaskDraft<'_>, today: Date) -> Result<ValidTask> {
        self.validate_with(draft, today, WindowChecks::ALL)
    }

    /// Like [`validate`](Self::validate), applying the date window only to
    /// the dates selected by `window`.
    ///
    /// # Errors
    ///
    /// Returns `HorizonError::Validation` carrying one message per failing
    /// field.
    pub fn validate_with(
        &self,
        draft: &TaskDraft<'_>,
        today: Date,
        window: WindowChecks,
    ) -> Result<ValidTask> {
        let mut errors = ValidationErrors::new();

        let name = draft.name.trim();
        let name_chars = name.chars().count();
        if name.is_empty() {
            errors.add(Field::Name, "Name is required");
        } else if name_chars < NAME_MIN_CHARS {
            errors.add(
                Field::Name,
                format!("Name must be at least {NAME_MIN_CHARS} characters"),
            );
        } else if name_chars > NAME_MAX_CHARS {
            errors.add(
                Field::Name,
                format!("Name must be at most {NAME_MAX_CHARS} characters"),
            );
        }

        let start = parse_field(draft.start_date, Field::StartDate, "Start date", &mut errors);
        let end = parse_field(draft.end_date, Field::EndDate, "End date", &mut errors);

        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                errors.add(Field::EndDate, "End date must be after start date");
            }
        }

        let windowed_start = start.filter(|_| window.start);
        if let (Some(start), Some(years)) = (windowed_start, self.config.max_years_past) {
            if let Ok(earliest) = today.checked_sub(i64::from(years).years()) {
                if start < earliest {
                    errors.add(
                        Field::StartDate,
                        format!("Start date cannot be more than {years} year(s) in the past"),
                    );
                }
            }
        }

        let windowed_end = end.filter(|_| window.end);
        if let (Some(end), Some(years)) = (windowed_end, self.config.max_years_future) {
            if let Ok(latest) = today.checked_add(i64::from(years).years()) {
                if end > latest {
                    errors.add(
                        Field::EndDate,
                        format!("End date cannot be more than {years} year(s) in the future"),
                    );
                }
            }
        }

        let color = draft.color.map(str::trim).filter(|c| !c.is_empty());
        if let Some(color) = color {
            if !is_hex_color(color) {
                errors.add(Field::Color, "Color must be a #RRGGBB value");
            }
        }

        match (start, end) {
            (Some(start_date), Some(end_date)) if errors.is_empty() => Ok(ValidTask {
                name: name.to_string(),
                start_date,
                end_date,
                color: color.map(str::to_string),
            }),
            _ => Err(HorizonError::Validation(errors)),
        }
    }
}

fn parse_field(
    input: &str,
    field: Field,
    label: &str,
    errors: &mut ValidationErrors,
) -> Option<Date> {
    if input.trim().is_empty() {
        errors.add(field, format!("{label} is required"));
        return None;
    }
    match dates::parse_date(input) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, format!("{label} must be a valid date (DD.MM.YYYY)"));
            None
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
