//! Calculation logic for the ROI engine.
//!
//! This module contains one function per derived metric (hourly rate, time
//! value and time reclaimed, VA cost, net savings and ROI percentage,
//! break-even months), the [`compute_roi`] entry points that chain them, and
//! the display formatting used by the results view.

mod break_even;
mod formatting;
mod hourly_rate;
mod roi;
mod savings;
mod time_value;
mod va_cost;

pub use break_even::{BreakEvenResult, calculate_break_even};
pub use formatting::{format_currency, format_number, format_percentage, format_results};
pub use hourly_rate::{HourlyRateResult, calculate_hourly_rate};
pub use roi::{
    RoiComputation, WARNING_NEGATIVE_NET_SAVINGS, WARNING_VA_HOURS_EXCEED_ADMIN_HOURS,
    WARNING_ZERO_VA_COST, compute_roi, compute_roi_with,
};
pub use savings::{SavingsResult, calculate_savings};
pub use time_value::{TimeValueResult, calculate_time_value};
pub use va_cost::{VaCostResult, calculate_va_cost};
