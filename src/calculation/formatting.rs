//! Display formatting for calculator results.
//!
//! Rounding happens here and only here; the computation itself keeps full
//! precision. Midpoints round away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::DisplayConfig;
use crate::models::{FormattedResults, Metric, RoiResults};

fn round_for_display(value: Decimal, dp: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    // Never display "-0".
    if rounded.is_zero() { Decimal::ZERO } else { rounded }
}

/// Inserts a comma between every group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a currency amount with 0 decimals and thousands separators.
///
/// # Examples
///
/// ```
/// use va_roi_engine::calculation::format_currency;
/// use va_roi_engine::config::DisplayConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let display = DisplayConfig::default();
/// assert_eq!(format_currency(Decimal::from(12_500), &display), "$12,500");
/// assert_eq!(format_currency(Decimal::from_str("-1249.5").unwrap(), &display), "-$1,250");
/// ```
pub fn format_currency(value: Decimal, display: &DisplayConfig) -> String {
    let rounded = round_for_display(value, 0);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let digits = rounded.abs().trunc().to_string();
    format!("{}{}{}", sign, display.currency_symbol, group_thousands(&digits))
}

/// Formats a percentage with 0 decimals, e.g. `"100%"`.
pub fn format_percentage(value: Decimal) -> String {
    format!("{}%", round_for_display(value, 0).trunc())
}

/// Formats a plain number with exactly 1 decimal place, e.g. `"12.0"`.
pub fn format_number(value: Decimal) -> String {
    let mut rounded = round_for_display(value, 1);
    rounded.rescale(1);
    rounded.to_string()
}

fn format_metric(metric: &Metric, display: &DisplayConfig, format: fn(Decimal) -> String) -> String {
    match metric.value() {
        Some(value) => format(value),
        None => display.not_applicable_label.clone(),
    }
}

/// Renders every metric of `results` for the results view.
///
/// Undefined metrics show the configured not-applicable label.
pub fn format_results(results: &RoiResults, display: &DisplayConfig) -> FormattedResults {
    FormattedResults {
        your_hourly_rate: format_currency(results.your_hourly_rate, display),
        annual_time_value: format_currency(results.annual_time_value, display),
        va_cost: format_currency(results.va_cost, display),
        net_savings: format_currency(results.net_savings, display),
        roi_percentage: format_metric(&results.roi_percentage, display, format_percentage),
        time_reclaimed: format_number(results.time_reclaimed),
        break_even_months: format_metric(&results.break_even_months, display, format_number),
    }
}
