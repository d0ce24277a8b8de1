//! Overridable settings for layout, validation and navigation.
//!
//! Settings are read from a JSON file. Every field has a default, so a file
//! only needs the values it overrides:
//!
//! ```json
//! { "layout": { "task_height": 38 }, "navigation": { "bounds": { "min_year": 2020, "max_year": 2030 } } }
//! ```
//!
//! Without an explicit path the loader looks for
//! `$XDG_CONFIG_HOME/horizon/config.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HorizonError, Result};

/// Upper bound for every pixel setting in [`LayoutConfig`].
pub const MAX_PIXELS: u32 = 10_000;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizonConfig {
    pub layout: LayoutConfig,
    pub validation: ValidationConfig,
    pub navigation: NavigationConfig,
}

impl HorizonConfig {
    /// Checks cross-field constraints after loading.
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        if let Some(bounds) = &self.navigation.bounds {
            bounds.validate()?;
        }
        Ok(())
    }
}

/// Geometry constants for the layout engine. Pixel values are rendering
/// hints; the percentages drive bar placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Smallest bar width in percent of the period
    pub min_width_percent: f64,
    /// Bar height in pixels
    pub task_height: u32,
    /// Vertical gap between rows in pixels
    pub task_gap: u32,
    /// Height reserved for the month/week header in pixels
    pub header_height: u32,
    /// Lower bound for the whole chart in pixels
    pub min_chart_height: u32,
    /// Space below the last row in pixels
    pub bottom_padding: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_width_percent: 1.0,
            task_height: 32,
            task_gap: 4,
            header_height: 60,
            min_chart_height: 200,
            bottom_padding: 40,
        }
    }
}

impl LayoutConfig {
    /// Height of one row: the bar plus the gap below it.
    pub fn row_height(&self) -> u32 {
        self.task_height.saturating_add(self.task_gap)
    }

    fn pixel_fields(&self) -> [(&'static str, u32); 5] {
        [
            ("layout.task_height", self.task_height),
            ("layout.task_gap", self.task_gap),
            ("layout.header_height", self.header_height),
            ("layout.min_chart_height", self.min_chart_height),
            ("layout.bottom_padding", self.bottom_padding),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.min_width_percent > 0.0 && self.min_width_percent <= 100.0) {
            return Err(HorizonError::invalid_input("layout.min_width_percent")
                .with_reason("must be greater than 0 and at most 100"));
        }
        if self.task_height == 0 {
            return Err(
                HorizonError::invalid_input("layout.task_height").with_reason("must be positive")
            );
        }
        if self.min_chart_height == 0 {
            return Err(HorizonError::invalid_input("layout.min_chart_height")
                .with_reason("must be positive"));
        }
        for (field, value) in self.pixel_fields() {
            if value > MAX_PIXELS {
                return Err(HorizonError::invalid_input(field)
                    .with_reason(format!("must be at most {MAX_PIXELS} pixels")));
            }
        }
        Ok(())
    }
}

/// Sanity window for task dates relative to today. `None` disables a side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Earliest accepted start date, in years before today
    pub max_years_past: Option<u8>,
    /// Latest accepted end date, in years after today
    pub max_years_future: Option<u8>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_years_past: Some(1),
            max_years_future: Some(2),
        }
    }
}

impl ValidationConfig {
    /// No date window at all.
    pub fn unrestricted() -> Self {
        Self {
            max_years_past: None,
            max_years_future: None,
        }
    }
}

/// Navigation limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub bounds: Option<YearBounds>,
}

/// Inclusive range of years navigation may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBounds {
    pub min_year: i16,
    pub max_year: i16,
}

impl YearBounds {
    pub fn new(min_year: i16, max_year: i16) -> Self {
        Self { min_year, max_year }
    }

    pub fn contains(&self, year: i16) -> bool {
        self.min_year <= year && year <= self.max_year
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year {
            return Err(HorizonError::Configuration {
                message: format!(
                    "navigation.bounds: min_year {} is after max_year {}",
                    self.min_year, self.max_year
                ),
            });
        }
        Ok(())
    }
}

/// Locates and parses the configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self { path: None }
    }

    /// Sets an explicit configuration file. A missing explicit file is an
    /// error, unlike the XDG default.
    pub fn with_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the configuration, falling back to defaults when no file exists
    /// at the XDG location.
    ///
    /// # Errors
    ///
    /// Returns `HorizonError::FileSystem` if an explicit file cannot be read,
    /// `HorizonError::Serialization` for malformed JSON, and
    /// `HorizonError::InvalidInput` if a value is out of range.
    pub fn load(self) -> Result<HorizonConfig> {
        let path = match self.path {
            Some(path) => path,
            None => match Self::default_config_path() {
                Some(path) => path,
                None => {
                    log::debug!("No configuration file found, using defaults");
                    return Ok(HorizonConfig::default());
                }
            },
        };

        log::debug!("Loading configuration from {}", path.display());
        let contents = std::fs::read_to_string(&path).map_err(|e| HorizonError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        Self::parse(&contents)
    }

    /// Parses and validates configuration JSON.
    pub fn parse(contents: &str) -> Result<HorizonConfig> {
        let config: HorizonConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the XDG config file if it exists.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("horizon").find_config_file("config.json")
    }
}
