//! HTTP API module for the ROI engine.
//!
//! This module provides the REST endpoints behind the website's ROI
//! calculator widget: `POST /calculate` and `GET /defaults`.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
