//! Annual VA cost calculation.

use rust_decimal::Decimal;

use crate::config::Assumptions;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::AuditStep;

/// The result of pricing the assistant for a year.
#[derive(Debug, Clone)]
pub struct VaCostResult {
    /// Annualized cost of the assistant.
    pub va_cost: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes `va_hourly_rate × va_hours_per_week × working_weeks_per_year`.
///
/// A zero rate or zero hours yields a zero cost here; the metrics that divide
/// by it handle that case themselves.
///
/// # Examples
///
/// ```
/// use va_roi_engine::calculation::calculate_va_cost;
/// use va_roi_engine::config::Assumptions;
/// use rust_decimal::Decimal;
///
/// let result = calculate_va_cost(Decimal::from(25), Decimal::from(10), &Assumptions::default(), 1).unwrap();
/// assert_eq!(result.va_cost, Decimal::from(12_500));
/// ```
pub fn calculate_va_cost(
    va_hourly_rate: Decimal,
    va_hours_per_week: Decimal,
    assumptions: &Assumptions,
    step_number: u32,
) -> CalculatorResult<VaCostResult> {
    let va_cost = va_hourly_rate
        .checked_mul(va_hours_per_week)
        .and_then(|weekly| weekly.checked_mul(assumptions.working_weeks_per_year))
        .ok_or_else(|| CalculatorError::overflow("va_cost"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "va_cost".to_string(),
        rule_name: "VA Cost".to_string(),
        formula: "va_hourly_rate * va_hours_per_week * working_weeks_per_year".to_string(),
        input: serde_json::json!({
            "va_hourly_rate": va_hourly_rate.normalize().to_string(),
            "va_hours_per_week": va_hours_per_week.normalize().to_string(),
            "working_weeks_per_year": assumptions.working_weeks_per_year.normalize().to_string()
        }),
        output: serde_json::json!({
            "va_cost": va_cost.normalize().to_string()
        }),
        reasoning: format!(
            "${}/hour x {}h/week x {} weeks = ${}",
            va_hourly_rate.normalize(),
            va_hours_per_week.normalize(),
            assumptions.working_weeks_per_year.normalize(),
            va_cost.normalize()
        ),
    };

    Ok(VaCostResult {
        va_cost,
        audit_step,
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
    fn test_standard_va_cost() {
        let result = calculate_va_cost(dec("25"), dec("10"), &Assumptions::default(), 1).unwrap();

        assert_eq!(result.va_cost, dec("12500"));
        assert_eq!(result.audit_step.rule_id, "va_cost");
        assert_eq!(result.audit_step.output["va_cost"].as_str().unwrap(), "12500");
    }

    #[test]
    fn test_fractional_rate_and_hours() {
        // 18.50 * 7.5 * 50 = 6937.5
        let result =
            calculate_va_cost(dec("18.50"), dec("7.5"), &Assumptions::default(), 1).unwrap();
        assert_eq!(result.va_cost, dec("6937.5"));
    }

    #[test]
    fn test_zero_rate_gives_zero_cost() {
        let result = calculate_va_cost(dec("0"), dec("10"), &Assumptions::default(), 1).unwrap();
        assert!(result.va_cost.is_zero());
    }

    #[test]
    fn test_zero_hours_gives_zero_cost() {
        let result = calculate_va_cost(dec("25"), dec("0"), &Assumptions::default(), 1).unwrap();
        assert!(result.va_cost.is_zero());
    }

    #[test]
    fn test_audit_reasoning_explains_calculation() {
        let result = calculate_va_cost(dec("25"), dec("10"), &Assumptions::default(), 2).unwrap();

        assert_eq!(result.audit_step.step_number, 2);
        assert!(result.audit_step.reasoning.contains("$25/hour"));
        assert!(result.audit_step.reasoning.contains("10h/week"));
        assert!(result.audit_step.reasoning.contains("50 weeks"));
        assert!(result.audit_step.reasoning.contains("$12500"));
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = calculate_va_cost(Decimal::MAX, dec("10"), &Assumptions::default(), 1);
        assert!(matches!(
            result,
            Err(CalculatorError::CalculationError { .. })
        ));
    }
}
