//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CalculatorError, CalculatorResult};
use crate::models::RoiInputs;

use super::types::{Assumptions, CalculatorConfig, DisplayConfig};

/// Loads and provides access to calculator configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and exposes the formula constants, display settings and form defaults.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── assumptions.yaml  # Calendar constants used by the formula
/// ├── display.yaml      # Currency symbol and "not applicable" label
/// └── defaults.yaml     # Initial calculator form values
/// ```
///
/// # Example
///
/// ```no_run
/// use va_roi_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("Annual hours: {}", loader.assumptions().annual_work_hours().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/standard")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - An assumption is zero or negative
    /// - A form default is not a valid calculator input
    pub fn load<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        let path = path.as_ref();

        let assumptions = Self::load_yaml::<Assumptions>(&path.join("assumptions.yaml"))?;
        assumptions.validate()?;

        let display = Self::load_yaml::<DisplayConfig>(&path.join("display.yaml"))?;

        let form_defaults = Self::load_yaml::<RoiInputs>(&path.join("defaults.yaml"))?;
        form_defaults.validate(assumptions.max_weekly_hours)?;

        debug!(path = %path.display(), "Loaded calculator configuration");

        Ok(Self {
            config: CalculatorConfig::new(assumptions, display, form_defaults),
        })
    }

    /// Builds the standard configuration without reading any files.
    ///
    /// # Example
    ///
    /// ```
    /// use va_roi_engine::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::standard();
    /// assert_eq!(loader.assumptions().annual_work_hours().unwrap(), Decimal::from(2000));
    /// assert_eq!(loader.display().currency_symbol, "$");
    /// ```
    pub fn standard() -> Self {
        Self {
            config: CalculatorConfig::new(
                Assumptions::default(),
                DisplayConfig::default(),
                RoiInputs::form_defaults(),
            ),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> CalculatorResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalculatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CalculatorError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the formula constants.
    pub fn assumptions(&self) -> &Assumptions {
        self.config.assumptions()
    }

    /// Returns the display settings.
    pub fn display(&self) -> &DisplayConfig {
        self.config.display()
    }

    /// Returns the initial form values.
    pub fn form_defaults(&self) -> &RoiInputs {
        self.config.form_defaults()
    }
}
