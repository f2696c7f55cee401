//! Core data models for the ROI engine.
//!
//! This module contains the calculator inputs, the derived results, and the
//! calculation envelope with its audit trace.

mod calculation_result;
mod roi_inputs;
mod roi_results;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use roi_inputs::RoiInputs;
pub use roi_results::{FormattedResults, Metric, RoiResults, UndefinedReason};
