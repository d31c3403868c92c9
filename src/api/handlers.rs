//! HTTP request handlers for the Leave Balance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_balance;
use crate::models::{BalanceResult, EmployeeProfile, LeaveRequest, approved_kinds};

use super::request::BalanceRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/balance", post(balance_handler))
        .with_state(state)
}

/// Handler for POST /balance endpoint.
///
/// Accepts an employee's profile fields and leave requests and returns the
/// derived balance, or the undefined outcome when no join date is on record.
async fn balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing balance request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
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

    // Convert request types to domain types
    let profile: EmployeeProfile = request.employee.into();
    let leave_requests: Vec<LeaveRequest> =
        request.leave_requests.into_iter().map(Into::into).collect();

    // The calculator assumes a sanitized adjustment; reject off-grid values
    // at this boundary.
    if let Err(err) = profile.validate_adjustment() {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %profile.id,
            error = %err,
            "Adjustment rejected"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    // "Today" is decided here; the calculator itself never reads the clock.
    let evaluation_date = request
        .evaluation_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let used_entries = approved_kinds(&leave_requests);

    match compute_balance(
        profile.joined_at,
        evaluation_date,
        &used_entries,
        profile.leave_adjustment,
        state.policy(),
    ) {
        Ok(outcome) => {
            match outcome.balance() {
                Some(balance) => info!(
                    correlation_id = %correlation_id,
                    employee_id = %profile.id,
                    regime = ?balance.regime,
                    total_entitlement = balance.total_entitlement,
                    remaining = %balance.remaining,
                    "Balance computed"
                ),
                None => info!(
                    correlation_id = %correlation_id,
                    employee_id = %profile.id,
                    "Balance undefined: no join date on record"
                ),
            }

            let result = BalanceResult {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee_id: profile.id,
                evaluation_date,
                outcome,
            };

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
                employee_id = %profile.id,
                error = %err,
                "Balance computation failed"
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
