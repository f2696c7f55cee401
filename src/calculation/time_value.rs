//! Admin time valuation.
//!
//! This module computes how many admin hours per week the team would reclaim
//! and what those hours are worth over a year.

use rust_decimal::Decimal;

use crate::config::Assumptions;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::AuditStep;

/// The result of valuing the team's admin time.
#[derive(Debug, Clone)]
pub struct TimeValueResult {
    /// Aggregate admin hours per week across all employees.
    pub time_reclaimed: Decimal,
    /// Admin hours per year across all employees.
    pub annual_admin_hours: Decimal,
    /// Monetary value of the annual admin hours.
    pub annual_time_value: Decimal,
    /// Audit steps for time reclaimed and annual time value, in that order.
    pub audit_steps: Vec<AuditStep>,
}

/// Values the admin time spent across the team.
///
/// ```text
/// time_reclaimed     = hours_per_week_on_admin × number_of_employees
/// annual_admin_hours = hours_per_week_on_admin × working_weeks_per_year × number_of_employees
/// annual_time_value  = annual_admin_hours × hourly_rate
/// ```
///
/// `time_reclaimed` depends only on the admin hours and head count, never on
/// salary or VA pricing.
///
/// # Arguments
///
/// * `hours_per_week_on_admin` - Weekly delegable admin hours per employee
/// * `number_of_employees` - Head count whose admin time is aggregated
/// * `hourly_rate` - Value of one hour, from [`super::calculate_hourly_rate`]
/// * `assumptions` - Calendar constants
/// * `step_number` - The step number of the first audit step produced
///
/// # Examples
///
/// ```
/// use va_roi_engine::calculation::calculate_time_value;
/// use va_roi_engine::config::Assumptions;
/// use rust_decimal::Decimal;
///
/// let result = calculate_time_value(
///     Decimal::from(10),
///     Decimal::from(3),
///     Decimal::from(50),
///     &Assumptions::default(),
///     2,
/// )
/// .unwrap();
/// assert_eq!(result.time_reclaimed, Decimal::from(30));
/// assert_eq!(result.annual_time_value, Decimal::from(75_000));
/// ```
pub fn calculate_time_value(
    hours_per_week_on_admin: Decimal,
    number_of_employees: Decimal,
    hourly_rate: Decimal,
    assumptions: &Assumptions,
    step_number: u32,
) -> CalculatorResult<TimeValueResult> {
    let time_reclaimed = hours_per_week_on_admin
        .checked_mul(number_of_employees)
        .ok_or_else(|| CalculatorError::overflow("time_reclaimed"))?;

    let annual_admin_hours = hours_per_week_on_admin
        .checked_mul(assumptions.working_weeks_per_year)
        .and_then(|hours| hours.checked_mul(number_of_employees))
        .ok_or_else(|| CalculatorError::overflow("annual_admin_hours"))?;

    let annual_time_value = annual_admin_hours
        .checked_mul(hourly_rate)
        .ok_or_else(|| CalculatorError::overflow("annual_time_value"))?;

    let reclaimed_step = AuditStep {
        step_number,
        rule_id: "time_reclaimed".to_string(),
        rule_name: "Time Reclaimed".to_string(),
        formula: "hours_per_week_on_admin * number_of_employees".to_string(),
        input: serde_json::json!({
            "hours_per_week_on_admin": hours_per_week_on_admin.normalize().to_string(),
            "number_of_employees": number_of_employees.normalize().to_string()
        }),
        output: serde_json::json!({
            "time_reclaimed": time_reclaimed.normalize().to_string()
        }),
        reasoning: format!(
            "{}h/week x {} employees = {}h/week reclaimed",
            hours_per_week_on_admin.normalize(),
            number_of_employees.normalize(),
            time_reclaimed.normalize()
        ),
    };

    let value_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "annual_time_value".to_string(),
        rule_name: "Annual Time Value".to_string(),
        formula: "hours_per_week_on_admin * working_weeks_per_year * number_of_employees * your_hourly_rate"
            .to_string(),
        input: serde_json::json!({
            "hours_per_week_on_admin": hours_per_week_on_admin.normalize().to_string(),
            "working_weeks_per_year": assumptions.working_weeks_per_year.normalize().to_string(),
            "number_of_employees": number_of_employees.normalize().to_string(),
            "your_hourly_rate": hourly_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "annual_admin_hours": annual_admin_hours.normalize().to_string(),
            "annual_time_value": annual_time_value.normalize().to_string()
        }),
        reasoning: format!(
            "{} admin hours/year x ${} = ${}",
            annual_admin_hours.normalize(),
            hourly_rate.normalize(),
            annual_time_value.normalize()
        ),
    };

    Ok(TimeValueResult {
        time_reclaimed,
        annual_admin_hours,
        annual_time_value,
        audit_steps: vec![reclaimed_step, value_step],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_single_employee_time_value() {
        let result =
            calculate_time_value(dec("10"), dec("1"), dec("50"), &Assumptions::default(), 1)
                .unwrap();

        assert_eq!(result.time_reclaimed, dec("10"));
        assert_eq!(result.annual_admin_hours, dec("500"));
        assert_eq!(result.annual_time_value, dec("25000"));
    }

    #[test]
    fn test_multiple_employees_scale_time_value() {
        let result =
            calculate_time_value(dec("10"), dec("3"), dec("50"), &Assumptions::default(), 1)
                .unwrap();

        assert_eq!(result.time_reclaimed, dec("30"));
        assert_eq!(result.annual_admin_hours, dec("1500"));
        assert_eq!(result.annual_time_value, dec("75000"));
    }

    #[test]
    fn test_time_reclaimed_ignores_hourly_rate() {
        let cheap =
            calculate_time_value(dec("6.5"), dec("4"), dec("1"), &Assumptions::default(), 1)
                .unwrap();
        let expensive =
            calculate_time_value(dec("6.5"), dec("4"), dec("900"), &Assumptions::default(), 1)
                .unwrap();

        assert_eq!(cheap.time_reclaimed, dec("26"));
        assert_eq!(cheap.time_reclaimed, expensive.time_reclaimed);
    }

    #[test]
    fn test_zero_employees_gives_zero_value() {
        let result =
            calculate_time_value(dec("10"), dec("0"), dec("50"), &Assumptions::default(), 1)
                .unwrap();

        assert_eq!(result.time_reclaimed, Decimal::ZERO);
        assert_eq!(result.annual_time_value, Decimal::ZERO);
    }

    #[test]
    fn test_produces_two_sequenced_audit_steps() {
        let result =
            calculate_time_value(dec("10"), dec("1"), dec("50"), &Assumptions::default(), 4)
                .unwrap();

        assert_eq!(result.audit_steps.len(), 2);
        assert_eq!(result.audit_steps[0].rule_id, "time_reclaimed");
        assert_eq!(result.audit_steps[0].step_number, 4);
        assert_eq!(result.audit_steps[1].rule_id, "annual_time_value");
        assert_eq!(result.audit_steps[1].step_number, 5);
        assert_eq!(
            result.audit_steps[1].output["annual_time_value"]
                .as_str()
                .unwrap(),
            "25000"
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = calculate_time_value(
            Decimal::MAX,
            dec("2"),
            dec("50"),
            &Assumptions::default(),
            1,
        );

        assert!(matches!(
            result,
            Err(CalculatorError::CalculationError { .. })
        ));
    }
}
