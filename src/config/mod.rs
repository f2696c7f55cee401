//! Configuration loading and management for the ROI engine.
//!
//! This module loads the calculator configuration from YAML files: the
//! calendar assumptions behind the formula, display settings for the results
//! view, and the initial form values.
//!
//! # Example
//!
//! ```no_run
//! use va_roi_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Weeks per year: {}", config.assumptions().working_weeks_per_year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{Assumptions, CalculatorConfig, DisplayConfig};
