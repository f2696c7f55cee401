//! ROI computation entry points.
//!
//! Chains the individual rules in formula order, sequencing their audit
//! steps and collecting warnings for results that deserve a second look.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::Assumptions;
use crate::error::CalculatorResult;
use crate::models::{AuditStep, AuditWarning, RoiInputs, RoiResults};

use super::{
    calculate_break_even, calculate_hourly_rate, calculate_savings, calculate_time_value,
    calculate_va_cost,
};

/// Warning code emitted when the VA would cost nothing.
pub const WARNING_ZERO_VA_COST: &str = "ZERO_VA_COST";
/// Warning code emitted when the VA costs more than the time it frees.
pub const WARNING_NEGATIVE_NET_SAVINGS: &str = "NEGATIVE_NET_SAVINGS";
/// Warning code emitted when the VA is booked for more hours than are reclaimed.
pub const WARNING_VA_HOURS_EXCEED_ADMIN_HOURS: &str = "VA_HOURS_EXCEED_ADMIN_HOURS";

/// Results of one computation together with how they were derived.
#[derive(Debug, Clone)]
pub struct RoiComputation {
    /// The derived metrics.
    pub results: RoiResults,
    /// One audit step per derived metric, in formula order.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings about the inputs or results.
    pub warnings: Vec<AuditWarning>,
}

/// Computes ROI metrics using the standard assumptions.
///
/// This is a pure function: identical inputs always produce identical results.
///
/// # Errors
///
/// Returns `InvalidInput` for a negative field or an hours-per-week value above
/// 168, and `CalculationError` if a value overflows.
///
/// # Examples
///
/// ```
/// use va_roi_engine::calculation::compute_roi;
/// use va_roi_engine::models::RoiInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = RoiInputs {
///     annual_salary: Decimal::from(100_000),
///     hours_per_week_on_admin: Decimal::from(10),
///     number_of_employees: Decimal::from(1),
///     va_hourly_rate: Decimal::from(25),
///     va_hours_per_week: Decimal::from(10),
/// };
///
/// let results = compute_roi(&inputs).unwrap();
/// assert_eq!(results.net_savings, Decimal::from(12_500));
/// assert_eq!(results.roi_percentage.value(), Some(Decimal::from(100)));
/// assert_eq!(results.break_even_months.value(), Some(Decimal::from(12)));
/// ```
pub fn compute_roi(inputs: &RoiInputs) -> CalculatorResult<RoiResults> {
    compute_roi_with(inputs, &Assumptions::default()).map(|computation| computation.results)
}

/// Computes ROI metrics under the given assumptions, keeping the audit trail.
pub fn compute_roi_with(
    inputs: &RoiInputs,
    assumptions: &Assumptions,
) -> CalculatorResult<RoiComputation> {
    assumptions.validate()?;
    inputs.validate(assumptions.max_weekly_hours)?;

    let mut audit_steps: Vec<AuditStep> = Vec::with_capacity(7);
    let mut step_number: u32 = 1;

    let hourly = calculate_hourly_rate(inputs.annual_salary, assumptions, step_number)?;
    audit_steps.push(hourly.audit_step);
    step_number += 1;

    let time_value = calculate_time_value(
        inputs.hours_per_week_on_admin,
        inputs.number_of_employees,
        hourly.hourly_rate,
        assumptions,
        step_number,
    )?;
    step_number += time_value.audit_steps.len() as u32;
    audit_steps.extend(time_value.audit_steps);

    let va = calculate_va_cost(
        inputs.va_hourly_rate,
        inputs.va_hours_per_week,
        assumptions,
        step_number,
    )?;
    audit_steps.push(va.audit_step);
    step_number += 1;

    let savings = calculate_savings(time_value.annual_time_value, va.va_cost, step_number)?;
    step_number += savings.audit_steps.len() as u32;
    audit_steps.extend(savings.audit_steps);

    let break_even =
        calculate_break_even(va.va_cost, savings.net_savings, assumptions, step_number)?;
    audit_steps.push(break_even.audit_step);

    let results = RoiResults {
        your_hourly_rate: hourly.hourly_rate,
        annual_time_value: time_value.annual_time_value,
        va_cost: va.va_cost,
        net_savings: savings.net_savings,
        roi_percentage: savings.roi_percentage,
        time_reclaimed: time_value.time_reclaimed,
        break_even_months: break_even.break_even_months,
    };

    let warnings = collect_warnings(inputs, &results);

    debug!(
        net_savings = %results.net_savings,
        roi_defined = results.roi_percentage.is_defined(),
        warnings = warnings.len(),
        "Computed ROI"
    );

    Ok(RoiComputation {
        results,
        audit_steps,
        warnings,
    })
}

fn collect_warnings(inputs: &RoiInputs, results: &RoiResults) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if results.va_cost.is_zero() {
        warnings.push(AuditWarning {
            code: WARNING_ZERO_VA_COST.to_string(),
            message: "VA cost is zero; ROI and break-even are not applicable".to_string(),
            severity: "medium".to_string(),
        });
    }

    if results.net_savings < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: WARNING_NEGATIVE_NET_SAVINGS.to_string(),
            message: format!(
                "VA cost exceeds the value of reclaimed time by {}; break-even shows the floor value",
                results.net_savings.abs().normalize()
            ),
            severity: "medium".to_string(),
        });
    }

    if inputs.va_hours_per_week > results.time_reclaimed {
        warnings.push(AuditWarning {
            code: WARNING_VA_HOURS_EXCEED_ADMIN_HOURS.to_string(),
            message: format!(
                "VA is booked for {}h/week but only {}h/week of admin work is reclaimed",
                inputs.va_hours_per_week.normalize(),
                results.time_reclaimed.normalize()
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}
