//! Error types for the ROI engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration or
//! computing a return on investment.

use thiserror::Error;

/// The main error type for the ROI engine.
///
/// A zero VA cost is not an error. It is reported
/// through [`crate::models::Metric::NotApplicable`] on the results instead.
///
/// # Example
///
/// ```
/// use va_roi_engine::error::CalculatorError;
///
/// let error = CalculatorError::InvalidInput {
///     field: "annual_salary".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'annual_salary': must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value parsed but is not usable.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration key holding the bad value.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A calculator input was negative, out of range or not numeric.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl CalculatorError {
    /// Builds an overflow error for the named quantity.
    pub(crate) fn overflow(quantity: &str) -> Self {
        CalculatorError::CalculationError {
            message: format!("arithmetic overflow while computing {}", quantity),
        }
    }
}

/// A type alias for Results that return CalculatorError.
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = CalculatorError::ConfigNotFound {
            path: "/missing/assumptions.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/assumptions.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = CalculatorError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = CalculatorError::InvalidConfig {
            field: "working_weeks_per_year".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'working_weeks_per_year': must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = CalculatorError::InvalidInput {
            field: "va_hourly_rate".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input 'va_hourly_rate': must not be negative"
        );
    }

    #[test]
    fn test_overflow_names_quantity() {
        let error = CalculatorError::overflow("va_cost");
        assert_eq!(
            error.to_string(),
            "Calculation error: arithmetic overflow while computing va_cost"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CalculatorError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> CalculatorResult<()> {
            Err(CalculatorError::InvalidInput {
                field: "annual_salary".to_string(),
                message: "must not be negative".to_string(),
            })
        }

        fn propagates_error() -> CalculatorResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
