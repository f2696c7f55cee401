//! Break-even point calculation.
//!
//! Reports how many months of savings it takes to cover a year of VA cost.
//! The value is floored at `break_even_floor_months` so tiny results do not
//! show as zero.

use rust_decimal::Decimal;

use crate::config::Assumptions;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{AuditStep, Metric, UndefinedReason};

/// The result of the break-even calculation.
#[derive(Debug, Clone)]
pub struct BreakEvenResult {
    /// Months until the VA cost is offset, or not applicable.
    pub break_even_months: Metric,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes `max(floor, va_cost / (net_savings / months_per_year))`.
///
/// The quotient is evaluated as `va_cost × months_per_year / net_savings`,
/// which is the same value without rounding the monthly savings first.
///
/// The metric is not applicable when either divisor is zero:
/// - `va_cost` is zero (nothing to recover), or
/// - `net_savings` is zero (the quotient has no value).
///
/// Negative net savings give a negative quotient, which the floor raises to
/// `break_even_floor_months`.
///
/// # Examples
///
/// ```
/// use va_roi_engine::calculation::calculate_break_even;
/// use va_roi_engine::config::Assumptions;
/// use rust_decimal::Decimal;
///
/// let result = calculate_break_even(
///     Decimal::from(12_500),
///     Decimal::from(12_500),
///     &Assumptions::default(),
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.break_even_months.value(), Some(Decimal::from(12)));
/// ```
pub fn calculate_break_even(
    va_cost: Decimal,
    net_savings: Decimal,
    assumptions: &Assumptions,
    step_number: u32,
) -> CalculatorResult<BreakEvenResult> {
    let floor = assumptions.break_even_floor_months;
    let input = serde_json::json!({
        "va_cost": va_cost.normalize().to_string(),
        "net_savings": net_savings.normalize().to_string(),
        "months_per_year": assumptions.months_per_year.normalize().to_string(),
        "floor_months": floor.normalize().to_string()
    });

    let undefined_reason = if va_cost.is_zero() {
        Some(UndefinedReason::ZeroVaCost)
    } else if net_savings.is_zero() {
        Some(UndefinedReason::NoNetSavings)
    } else {
        None
    };

    if let Some(reason) = undefined_reason {
        let audit_step = AuditStep {
            step_number,
            rule_id: "break_even".to_string(),
            rule_name: "Break-Even Months".to_string(),
            formula: "max(floor_months, va_cost / (net_savings / months_per_year))".to_string(),
            input,
            output: serde_json::json!({
                "break_even_months": null,
                "reason": reason
            }),
            reasoning: format!("Break-even not applicable - {}", reason.describe()),
        };

        return Ok(BreakEvenResult {
            break_even_months: Metric::NotApplicable { reason },
            audit_step,
        });
    }

    let raw_months = va_cost
        .checked_mul(assumptions.months_per_year)
        .and_then(|scaled| scaled.checked_div(net_savings))
        .ok_or_else(|| CalculatorError::overflow("break_even_months"))?;
    let floored = raw_months < floor;
    let months = raw_months.max(floor);

    let audit_step = AuditStep {
        step_number,
        rule_id: "break_even".to_string(),
        rule_name: "Break-Even Months".to_string(),
        formula: "max(floor_months, va_cost / (net_savings / months_per_year))".to_string(),
        input,
        output: serde_json::json!({
            "break_even_months": months.normalize().to_string(),
            "floor_applied": floored
        }),
        reasoning: if floored {
            format!(
                "${} / (${} / {}) = {} months, raised to the {} month floor",
                va_cost.normalize(),
                net_savings.normalize(),
                assumptions.months_per_year.normalize(),
                raw_months.normalize(),
                floor.normalize()
            )
        } else {
            format!(
                "${} / (${} / {}) = {} months",
                va_cost.normalize(),
                net_savings.normalize(),
                assumptions.months_per_year.normalize(),
                months.normalize()
            )
        },
    };

    Ok(BreakEvenResult {
        break_even_months: Metric::Defined { value: months },
        audit_step,
    })
}
