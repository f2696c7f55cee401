//! Configuration types for the ROI calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, CalculatorResult};
use crate::models::RoiInputs;

/// The calendar constants behind the ROI formula.
///
/// Every key is optional in `assumptions.yaml`; a missing key falls back to
/// the standard value (40-hour week, 50 working weeks, 12 months, 0.1 month
/// break-even floor, 168 hours in a week).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Hours in a full working week, used to derive an hourly rate from salary.
    #[serde(default = "default_work_hours_per_week")]
    pub work_hours_per_week: Decimal,
    /// Working weeks per year.
    #[serde(default = "default_working_weeks_per_year")]
    pub working_weeks_per_year: Decimal,
    /// Months per year, used to express break-even in months.
    #[serde(default = "default_months_per_year")]
    pub months_per_year: Decimal,
    /// Smallest break-even value ever reported, in months.
    #[serde(default = "default_break_even_floor_months")]
    pub break_even_floor_months: Decimal,
    /// Upper bound accepted for any hours-per-week input.
    #[serde(default = "default_max_weekly_hours")]
    pub max_weekly_hours: Decimal,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            work_hours_per_week: default_work_hours_per_week(),
            working_weeks_per_year: default_working_weeks_per_year(),
            months_per_year: default_months_per_year(),
            break_even_floor_months: default_break_even_floor_months(),
            max_weekly_hours: default_max_weekly_hours(),
        }
    }
}

impl Assumptions {
    /// Returns the number of working hours in a year (40 × 50 by default).
    ///
    /// # Example
    ///
    /// ```
    /// use va_roi_engine::config::Assumptions;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Assumptions::default().annual_work_hours().unwrap(), Decimal::from(2000));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if the product overflows.
    pub fn annual_work_hours(&self) -> CalculatorResult<Decimal> {
        self.work_hours_per_week
            .checked_mul(self.working_weeks_per_year)
            .ok_or_else(|| CalculatorError::overflow("annual_work_hours"))
    }

    /// Checks that every constant is usable as a divisor or bound.
    pub fn validate(&self) -> CalculatorResult<()> {
        let checks = [
            ("work_hours_per_week", self.work_hours_per_week),
            ("working_weeks_per_year", self.working_weeks_per_year),
            ("months_per_year", self.months_per_year),
            ("break_even_floor_months", self.break_even_floor_months),
            ("max_weekly_hours", self.max_weekly_hours),
        ];

        for (field, value) in checks {
            if value <= Decimal::ZERO {
                return Err(CalculatorError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must be greater than zero, got {}", value),
                });
            }
        }

        // Keep the product inside Decimal range so the hourly rate divisor is safe.
        if self.annual_work_hours().is_err() {
            return Err(CalculatorError::InvalidConfig {
                field: "working_weeks_per_year".to_string(),
                message: "annual work hours overflow".to_string(),
            });
        }

        Ok(())
    }
}

fn default_work_hours_per_week() -> Decimal {
    Decimal::from(40)
}

fn default_working_weeks_per_year() -> Decimal {
    Decimal::from(50)
}

fn default_months_per_year() -> Decimal {
    Decimal::from(12)
}

fn default_break_even_floor_months() -> Decimal {
    Decimal::new(1, 1)
}

fn default_max_weekly_hours() -> Decimal {
    Decimal::from(168)
}

/// Display settings for the results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol placed before currency amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Text shown in place of a metric that is not defined.
    #[serde(default = "default_not_applicable_label")]
    pub not_applicable_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            not_applicable_label: default_not_applicable_label(),
        }
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_not_applicable_label() -> String {
    "N/A".to_string()
}

/// The complete calculator configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Calendar constants for the formula.
    assumptions: Assumptions,
    /// Results view settings.
    display: DisplayConfig,
    /// Values the calculator form starts with.
    form_defaults: RoiInputs,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(assumptions: Assumptions, display: DisplayConfig, form_defaults: RoiInputs) -> Self {
        Self {
            assumptions,
            display,
            form_defaults,
        }
    }

    /// Returns the formula constants.
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Returns the display settings.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Returns the initial form values.
    pub fn form_defaults(&self) -> &RoiInputs {
        &self.form_defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assumptions_match_standard_calendar() {
        let assumptions = Assumptions::default();
        assert_eq!(assumptions.work_hours_per_week, Decimal::from(40));
        assert_eq!(assumptions.working_weeks_per_year, Decimal::from(50));
        assert_eq!(assumptions.months_per_year, Decimal::from(12));
        assert_eq!(assumptions.break_even_floor_months, Decimal::new(1, 1));
        assert_eq!(assumptions.max_weekly_hours, Decimal::from(168));
        assert_eq!(assumptions.annual_work_hours().unwrap(), Decimal::from(2000));
    }

    #[test]
    fn test_annual_work_hours_overflow_is_an_error() {
        let assumptions = Assumptions {
            work_hours_per_week: Decimal::MAX,
            working_weeks_per_year: Decimal::from(2),
            ..Assumptions::default()
        };

        match assumptions.annual_work_hours() {
            Err(CalculatorError::CalculationError { message }) => {
                assert!(message.contains("annual_work_hours"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
        assert!(matches!(
            assumptions.validate(),
            Err(CalculatorError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let assumptions: Assumptions = serde_yaml::from_str("working_weeks_per_year: 48").unwrap();
        assert_eq!(assumptions.working_weeks_per_year, Decimal::from(48));
        assert_eq!(assumptions.work_hours_per_week, Decimal::from(40));
        assert_eq!(assumptions.break_even_floor_months, Decimal::new(1, 1));
    }

    #[test]
    fn test_zero_weeks_is_rejected() {
        let assumptions = Assumptions {
            working_weeks_per_year: Decimal::ZERO,
            ..Assumptions::default()
        };

        match assumptions.validate() {
            Err(CalculatorError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "working_weeks_per_year");
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_floor_is_rejected() {
        let assumptions = Assumptions {
            break_even_floor_months: Decimal::new(-1, 0),
            ..Assumptions::default()
        };
        assert!(assumptions.validate().is_err());
    }

    #[test]
    fn test_default_assumptions_are_valid() {
        assert!(Assumptions::default().validate().is_ok());
    }

    #[test]
    fn test_display_defaults() {
        let display: DisplayConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(display.currency_symbol, "$");
        assert_eq!(display.not_applicable_label, "N/A");
    }
}
