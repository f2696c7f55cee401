//! Net savings and ROI percentage.
//!
//! ROI divides by the VA cost, so a zero cost produces an explicit
//! not-applicable metric instead of an infinite percentage.

use rust_decimal::Decimal;

use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{AuditStep, Metric, UndefinedReason};

/// The result of comparing time value with VA cost.
#[derive(Debug, Clone)]
pub struct SavingsResult {
    /// `annual_time_value - va_cost`.
    pub net_savings: Decimal,
    /// `net_savings / va_cost * 100`, or not applicable when the cost is zero.
    pub roi_percentage: Metric,
    /// Audit steps for net savings and ROI, in that order.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes net savings and the ROI percentage.
///
/// ```text
/// net_savings    = annual_time_value − va_cost
/// roi_percentage = (net_savings / va_cost) × 100
/// ```
///
/// # Examples
///
/// ```
/// use va_roi_engine::calculation::calculate_savings;
/// use va_roi_engine::models::Metric;
/// use rust_decimal::Decimal;
///
/// let result = calculate_savings(Decimal::from(25_000), Decimal::from(12_500), 1).unwrap();
/// assert_eq!(result.net_savings, Decimal::from(12_500));
/// assert_eq!(result.roi_percentage, Metric::Defined { value: Decimal::from(100) });
/// ```
pub fn calculate_savings(
    annual_time_value: Decimal,
    va_cost: Decimal,
    step_number: u32,
) -> CalculatorResult<SavingsResult> {
    let net_savings = annual_time_value
        .checked_sub(va_cost)
        .ok_or_else(|| CalculatorError::overflow("net_savings"))?;

    let savings_step = AuditStep {
        step_number,
        rule_id: "net_savings".to_string(),
        rule_name: "Net Savings".to_string(),
        formula: "annual_time_value - va_cost".to_string(),
        input: serde_json::json!({
            "annual_time_value": annual_time_value.normalize().to_string(),
            "va_cost": va_cost.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_savings": net_savings.normalize().to_string()
        }),
        reasoning: format!(
            "${} - ${} = ${}",
            annual_time_value.normalize(),
            va_cost.normalize(),
            net_savings.normalize()
        ),
    };

    let (roi_percentage, roi_step) = if va_cost.is_zero() {
        let reason = UndefinedReason::ZeroVaCost;
        let step = AuditStep {
            step_number: step_number + 1,
            rule_id: "roi_percentage".to_string(),
            rule_name: "ROI Percentage".to_string(),
            formula: "net_savings / va_cost * 100".to_string(),
            input: serde_json::json!({
                "net_savings": net_savings.normalize().to_string(),
                "va_cost": va_cost.normalize().to_string()
            }),
            output: serde_json::json!({
                "roi_percentage": null,
                "reason": reason
            }),
            reasoning: format!("ROI not applicable - {}", reason.describe()),
        };
        (Metric::NotApplicable { reason }, step)
    } else {
        let value = net_savings
            .checked_div(va_cost)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(|| CalculatorError::overflow("roi_percentage"))?;
        let step = AuditStep {
            step_number: step_number + 1,
            rule_id: "roi_percentage".to_string(),
            rule_name: "ROI Percentage".to_string(),
            formula: "net_savings / va_cost * 100".to_string(),
            input: serde_json::json!({
                "net_savings": net_savings.normalize().to_string(),
                "va_cost": va_cost.normalize().to_string()
            }),
            output: serde_json::json!({
                "roi_percentage": value.normalize().to_string()
            }),
            reasoning: format!(
                "${} / ${} x 100 = {}%",
                net_savings.normalize(),
                va_cost.normalize(),
                value.normalize()
            ),
        };
        (Metric::Defined { value }, step)
    };

    Ok(SavingsResult {
        net_savings,
        roi_percentage,
        audit_steps: vec![savings_step, roi_step],
    })
}
