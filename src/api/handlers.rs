//! HTTP request handlers for the ROI engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_roi_with, format_results};
use crate::config::ConfigLoader;
use crate::error::CalculatorResult;
use crate::models::{AuditTrace, CalculationResult, RoiInputs};

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/defaults", get(defaults_handler))
        .with_state(state)
}

/// Handler for GET /defaults.
///
/// Returns the values the calculator form starts with.
async fn defaults_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config().form_defaults().clone())
}

/// Handler for POST /calculate endpoint.
///
/// Accepts the five calculator inputs and returns the derived metrics,
/// their display strings and the audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<RoiInputs>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ROI calculation request");

    let inputs = match payload {
        Ok(Json(inputs)) => inputs,
        Err(rejection) => {
            let error = match rejection {
                // Missing fields and non-numeric values both land here.
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match perform_calculation(inputs, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                net_savings = %result.results.net_savings,
                roi = %result.formatted.roi_percentage,
                warnings = result.audit_trace.warnings.len(),
                duration_us = result.audit_trace.duration_us,
                "ROI calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "ROI calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Runs the computation and wraps it in a [`CalculationResult`] envelope.
fn perform_calculation(
    inputs: RoiInputs,
    config: &ConfigLoader,
) -> CalculatorResult<CalculationResult> {
    let start_time = Instant::now();

    let computation = compute_roi_with(&inputs, config.assumptions())?;
    let formatted = format_results(&computation.results, config.display());

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        inputs,
        results: computation.results,
        formatted,
        audit_trace: AuditTrace {
            steps: computation.audit_steps,
            warnings: computation.warnings,
            duration_us,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/standard").expect("Failed to load config");
        AppState::new(config)
    }

    fn create_valid_request() -> RoiInputs {
        RoiInputs::form_defaults()
    }

    async fn post_json(router: Router, body: String) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        serde_json::to_string(&create_valid_request()).unwrap(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResult = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.inputs, RoiInputs::form_defaults());
        assert_eq!(result.results.net_savings, Decimal::from(12_500));
        assert_eq!(result.formatted.roi_percentage, "100%");
        assert_eq!(result.audit_trace.steps.len(), 7);
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = post_json(router, "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_field_returns_400() {
        let router = create_router(create_test_state());

        let body = r#"{
            "annual_salary": 100000,
            "hours_per_week_on_admin": 10,
            "number_of_employees": 1,
            "va_hourly_rate": 25
        }"#;
        let (status, body) = post_json(router, body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(
            error.message.contains("va_hours_per_week"),
            "Expected error message to name the missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_negative_input_returns_400_with_field() {
        let router = create_router(create_test_state());

        let mut request = create_valid_request();
        request.va_hourly_rate = Decimal::from(-25);
        let (status, body) = post_json(router, serde_json::to_string(&request).unwrap()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_INPUT");
        assert_eq!(error.field.as_deref(), Some("va_hourly_rate"));
    }

    #[tokio::test]
    async fn test_api_005_body_deserializes_into_inputs() {
        let router = create_router(create_test_state());

        let body = r#"{
            "annual_salary": "100000.00",
            "hours_per_week_on_admin": 10,
            "number_of_employees": "1",
            "va_hourly_rate": 25,
            "va_hours_per_week": "10"
        }"#;
        let (status, body) = post_json(router, body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let result: CalculationResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.inputs, RoiInputs::form_defaults());
    }

    #[tokio::test]
    async fn test_api_006_defaults_returns_form_values() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/defaults")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let defaults: RoiInputs = serde_json::from_slice(&body).unwrap();
        assert_eq!(defaults, RoiInputs::form_defaults());
    }

    #[test]
    fn test_perform_calculation_fills_envelope() {
        let config = ConfigLoader::standard();
        let result = perform_calculation(RoiInputs::form_defaults(), &config).unwrap();

        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(result.formatted.break_even_months, "12.0");
        assert!(result.audit_trace.warnings.is_empty());
    }
}
