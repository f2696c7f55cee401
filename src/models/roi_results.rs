//! Calculator output models.
//!
//! This module contains [`RoiResults`], the derived metrics for one set of
//! inputs, the [`Metric`] wrapper for values that can be undefined, and
//! [`FormattedResults`], the display strings shown in the results view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Why a metric has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedReason {
    /// The VA would cost nothing, so there is no investment to return on.
    ZeroVaCost,
    /// The VA costs exactly what the time it frees is worth, so there is no monthly saving to divide by.
    NoNetSavings,
}

impl UndefinedReason {
    /// Human-readable explanation used in audit reasoning.
    pub fn describe(&self) -> &'static str {
        match self {
            UndefinedReason::ZeroVaCost => "VA cost is zero",
            UndefinedReason::NoNetSavings => "net savings are zero",
        }
    }
}

/// A derived value that is either defined or explicitly not applicable.
///
/// Used for the metrics that divide by VA cost or net savings, so that a
/// degenerate input never surfaces as NaN or infinity.
///
/// # Example
///
/// ```
/// use va_roi_engine::models::{Metric, UndefinedReason};
/// use rust_decimal::Decimal;
///
/// let roi = Metric::Defined { value: Decimal::from(100) };
/// assert_eq!(roi.value(), Some(Decimal::from(100)));
///
/// let undefined = Metric::NotApplicable { reason: UndefinedReason::ZeroVaCost };
/// assert!(!undefined.is_defined());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Metric {
    /// The metric has a finite value.
    Defined {
        /// The computed value.
        value: Decimal,
    },
    /// The metric cannot be computed for these inputs.
    NotApplicable {
        /// Why the metric is undefined.
        reason: UndefinedReason,
    },
}

impl Metric {
    /// Returns the value if the metric is defined.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Metric::Defined { value } => Some(*value),
            Metric::NotApplicable { .. } => None,
        }
    }

    /// Returns true if the metric carries a value.
    pub fn is_defined(&self) -> bool {
        matches!(self, Metric::Defined { .. })
    }

    /// Returns the reason the metric is undefined, if it is.
    pub fn undefined_reason(&self) -> Option<UndefinedReason> {
        match self {
            Metric::Defined { .. } => None,
            Metric::NotApplicable { reason } => Some(*reason),
        }
    }
}

/// The metrics derived from one set of [`crate::models::RoiInputs`].
///
/// Results are only valid for the inputs used to produce them; a fresh
/// value is built for every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiResults {
    /// Effective hourly value of the requester's time.
    pub your_hourly_rate: Decimal,
    /// Annualized value of all admin time currently spent.
    pub annual_time_value: Decimal,
    /// Annualized cost of engaging the assistant.
    pub va_cost: Decimal,
    /// `annual_time_value - va_cost`. Negative when the VA costs more than the time freed.
    pub net_savings: Decimal,
    /// `net_savings / va_cost * 100`.
    pub roi_percentage: Metric,
    /// Aggregate admin hours per week freed up.
    pub time_reclaimed: Decimal,
    /// Months until the VA cost is offset by savings.
    pub break_even_months: Metric,
}

/// Display strings for the results view.
///
/// Currency uses 0 decimals, percentages 0 decimals, and other numbers
/// 1 decimal place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResults {
    /// Formatted hourly rate, e.g. "$50".
    pub your_hourly_rate: String,
    /// Formatted annual time value, e.g. "$25,000".
    pub annual_time_value: String,
    /// Formatted VA cost, e.g. "$12,500".
    pub va_cost: String,
    /// Formatted net savings, e.g. "$12,500".
    pub net_savings: String,
    /// Formatted ROI, e.g. "100%".
    pub roi_percentage: String,
    /// Formatted weekly hours reclaimed, e.g. "10.0".
    pub time_reclaimed: String,
    /// Formatted break-even, e.g. "12.0".
    pub break_even_months: String,
}
