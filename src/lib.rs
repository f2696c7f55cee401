//! ROI Engine for virtual assistant staffing
//!
//! This crate computes the return on investment of hiring a virtual assistant
//! from five business inputs, formats the results for display, and serves the
//! computation over HTTP for the website's calculator widget.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
