//! # Error Handling Middleware
//!
//! Maps scheduling errors to HTTP status codes and JSON error bodies so every
//! endpoint reports failures the same way.
//!
//! Validation failures block the form submission and carry enough detail for
//! an inline message. Store failures surface as a generic "operation failed"
//! with the underlying message attached for diagnostics.

use academico_core::errors::ScheduleError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Rejected input is the client's problem; only store failures are errors
        match &self.0 {
            err if err.is_validation() => tracing::warn!("Request rejected: {}", err),
            ScheduleError::Store(report) => tracing::error!("Record store failure: {:?}", report),
            err => tracing::info!("Request failed: {}", err),
        }

        let (status, body) = match &self.0 {
            ScheduleError::InvalidRange { start, end } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": self.0.to_string(),
                    "field": "end_time",
                    "start_time": start,
                    "end_time": end,
                }),
            ),
            ScheduleError::OverlapConflict {
                conflicting_id,
                weekday,
                start,
                end,
            } => (
                StatusCode::CONFLICT,
                json!({
                    "error": self.0.to_string(),
                    "conflict": {
                        "id": conflicting_id,
                        "weekday": weekday,
                        "start_time": start,
                        "end_time": end,
                    },
                }),
            ),
            ScheduleError::Validation(_) => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.0.to_string() }))
            }
            ScheduleError::NotFound(_) => {
                (StatusCode::NOT_FOUND, json!({ "error": self.0.to_string() }))
            }
            ScheduleError::Store(report) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Operation failed", "details": report.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Allows using `?` on `ScheduleResult` inside handlers
impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Store(err))
    }
}

// Malformed requests are reported as validation errors rather than axum's
// plain-text rejections, so forms get one error shape.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(ScheduleError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(ScheduleError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(ScheduleError::Validation(rejection.body_text()))
    }
}

/// Maps a ScheduleError to an HTTP response
pub fn map_error(err: ScheduleError) -> Response {
    AppError(err).into_response()
}
