//! Error types for the timeline library.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Comprehensive error type for all timeline operations.
#[derive(Error, Debug)]
pub enum HorizonError {
    /// Task input rejected by validation; nothing was applied
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Calendar arithmetic left the supported date range
    #[error("Date out of range: {message}")]
    DateOutOfRange {
        message: String,
        #[source]
        source: jiff::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Form field a validation message is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    StartDate,
    EndDate,
    Color,
    General,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::StartDate => "start_date",
            Field::EndDate => "end_date",
            Field::Color => "color",
            Field::General => "general",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field → message mapping produced when task input is rejected.
///
/// Only the first message recorded for a field is kept, so the most basic
/// problem (e.g. "required") wins over follow-up checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field` unless one is already present.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> HorizonError {
        HorizonError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl HorizonError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a calendar arithmetic failure with context.
    pub fn date_out_of_range(message: impl Into<String>, source: jiff::Error) -> Self {
        Self::DateOutOfRange {
            message: message.into(),
            source,
        }
    }

    /// The field errors carried by a validation failure, if this is one.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            HorizonError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Specialized extension trait for calendar arithmetic Results.
pub trait DateResultExt<T> {
    /// Map jiff errors to `DateOutOfRange` with a message.
    fn date_context(self, message: &str) -> Result<T>;
}

impl<T> DateResultExt<T> for std::result::Result<T, jiff::Error> {
    fn date_context(self, message: &str) -> Result<T> {
        self.map_err(|e| HorizonError::date_out_of_range(message, e))
    }
}

/// Result type alias for timeline operations
pub type Result<T> = std::result::Result<T, HorizonError>;
