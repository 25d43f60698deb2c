//! HTTP request handlers for the payroll calculator API.
//!
//! Each handler is a thin wrapper over one pure calculator.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{classify_status, compute_breakdown, compute_eosb};
use crate::error::PayrollResult;
use crate::models::{AttendanceObservation, AttendanceStatus, EosbInput};

use super::request::{BreakdownRequest, ClassifyRequest, EosbRequest};
use super::response::{ApiError, ApiErrorResponse};

/// Response body for `POST /attendance/classify`.
#[derive(Debug, Serialize)]
struct ClassifyResponse {
    status: AttendanceStatus,
    label: &'static str,
}

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new()
        .route("/compensation/breakdown", post(breakdown_handler))
        .route("/eosb", post(eosb_handler))
        .route("/attendance/classify", post(classify_handler))
}

/// Handler for POST /compensation/breakdown.
async fn breakdown_handler(payload: Result<Json<BreakdownRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakdown request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    respond(
        correlation_id,
        "breakdown",
        compute_breakdown(request.basic_salary, &request.allowances, &request.deductions),
    )
}

/// Handler for POST /eosb.
async fn eosb_handler(payload: Result<Json<EosbRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing EOSB request");

    let input: EosbInput = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    respond(correlation_id, "eosb", compute_eosb(&input))
}

/// Handler for POST /attendance/classify.
async fn classify_handler(payload: Result<Json<ClassifyRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let observation: AttendanceObservation = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let status = classify_status(&observation);
    respond(
        correlation_id,
        "classify",
        Ok(ClassifyResponse {
            status,
            label: status.label(),
        }),
    )
}

/// Serializes a calculator result, mapping errors onto API error bodies.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    operation: &str,
    result: PayrollResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                operation,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                operation,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}
