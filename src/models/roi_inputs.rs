//! Calculator input model.
//!
//! This module defines the [`RoiInputs`] value object entered by a visitor
//! on the calculator form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, CalculatorResult};

/// The five business-facing numbers entered on the calculator form.
///
/// All fields are non-negative quantities. Hours-per-week fields are also
/// bounded by the number of hours in a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiInputs {
    /// Yearly compensation or business income, in currency units.
    pub annual_salary: Decimal,
    /// Hours per week spent on delegable administrative work.
    pub hours_per_week_on_admin: Decimal,
    /// Number of people whose admin time is aggregated.
    pub number_of_employees: Decimal,
    /// The assistant's billing rate per hour.
    pub va_hourly_rate: Decimal,
    /// Hours per week the assistant would be engaged.
    pub va_hours_per_week: Decimal,
}

impl RoiInputs {
    /// The values the calculator form starts with.
    ///
    /// # Examples
    ///
    /// ```
    /// use va_roi_engine::models::RoiInputs;
    /// use rust_decimal::Decimal;
    ///
    /// let inputs = RoiInputs::form_defaults();
    /// assert_eq!(inputs.annual_salary, Decimal::from(100_000));
    /// assert_eq!(inputs.va_hourly_rate, Decimal::from(25));
    /// ```
    pub fn form_defaults() -> Self {
        Self {
            annual_salary: Decimal::from(100_000),
            hours_per_week_on_admin: Decimal::from(10),
            number_of_employees: Decimal::ONE,
            va_hourly_rate: Decimal::from(25),
            va_hours_per_week: Decimal::from(10),
        }
    }

    /// Returns each field paired with its wire name, in form order.
    pub fn fields(&self) -> [(&'static str, Decimal); 5] {
        [
            ("annual_salary", self.annual_salary),
            ("hours_per_week_on_admin", self.hours_per_week_on_admin),
            ("number_of_employees", self.number_of_employees),
            ("va_hourly_rate", self.va_hourly_rate),
            ("va_hours_per_week", self.va_hours_per_week),
        ]
    }

    /// Rejects inputs that are not meaningful business quantities.
    ///
    /// Fields are checked in form order and the first failure is returned,
    /// naming the offending field.
    ///
    /// # Arguments
    ///
    /// * `max_weekly_hours` - Upper bound for the two hours-per-week fields
    ///
    /// # Examples
    ///
    /// ```
    /// use va_roi_engine::models::RoiInputs;
    /// use rust_decimal::Decimal;
    ///
    /// let mut inputs = RoiInputs::form_defaults();
    /// assert!(inputs.validate(Decimal::from(168)).is_ok());
    ///
    /// inputs.va_hourly_rate = Decimal::from(-5);
    /// assert!(inputs.validate(Decimal::from(168)).is_err());
    /// ```
    pub fn validate(&self, max_weekly_hours: Decimal) -> CalculatorResult<()> {
        for (field, value) in self.fields() {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(CalculatorError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        for (field, value) in [
            ("hours_per_week_on_admin", self.hours_per_week_on_admin),
            ("va_hours_per_week", self.va_hours_per_week),
        ] {
            if value > max_weekly_hours {
                return Err(CalculatorError::InvalidInput {
                    field: field.to_string(),
                    message: format!(
                        "must not exceed {} hours per week, got {}",
                        max_weekly_hours, value
                    ),
                });
            }
        }

        Ok(())
    }
}
