//! Hourly rate derivation.
//!
//! Converts an annual salary into the effective hourly value of the
//! requester's time.

use rust_decimal::Decimal;

use crate::config::Assumptions;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::AuditStep;

/// The result of deriving an hourly rate, including the audit step.
#[derive(Debug, Clone)]
pub struct HourlyRateResult {
    /// The effective hourly value of the requester's time.
    pub hourly_rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives the requester's hourly rate from their annual salary.
///
/// `hourly_rate = annual_salary / (work_hours_per_week × working_weeks_per_year)`,
/// which is `annual_salary / 2000` under the standard assumptions.
///
/// # Arguments
///
/// * `annual_salary` - Yearly compensation, already validated as non-negative
/// * `assumptions` - Calendar constants, already validated as positive
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use va_roi_engine::calculation::calculate_hourly_rate;
/// use va_roi_engine::config::Assumptions;
/// use rust_decimal::Decimal;
///
/// let result = calculate_hourly_rate(Decimal::from(100_000), &Assumptions::default(), 1).unwrap();
/// assert_eq!(result.hourly_rate, Decimal::from(50));
/// ```
pub fn calculate_hourly_rate(
    annual_salary: Decimal,
    assumptions: &Assumptions,
    step_number: u32,
) -> CalculatorResult<HourlyRateResult> {
    let annual_work_hours = assumptions.annual_work_hours()?;

    let hourly_rate = annual_salary
        .checked_div(annual_work_hours)
        .ok_or_else(|| CalculatorError::overflow("your_hourly_rate"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_rate".to_string(),
        rule_name: "Hourly Rate".to_string(),
        formula: "annual_salary / (work_hours_per_week * working_weeks_per_year)".to_string(),
        input: serde_json::json!({
            "annual_salary": annual_salary.normalize().to_string(),
            "work_hours_per_week": assumptions.work_hours_per_week.normalize().to_string(),
            "working_weeks_per_year": assumptions.working_weeks_per_year.normalize().to_string()
        }),
        output: serde_json::json!({
            "annual_work_hours": annual_work_hours.normalize().to_string(),
            "your_hourly_rate": hourly_rate.normalize().to_string()
        }),
        reasoning: format!(
            "${} / {} hours = ${} per hour",
            annual_salary.normalize(),
            annual_work_hours.normalize(),
            hourly_rate.normalize()
        ),
    };

    Ok(HourlyRateResult {
        hourly_rate,
        audit_step,
    })
}
