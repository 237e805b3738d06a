//! Unified error types for the showcase API
//!
//! Two layers:
//! - `DomainError`: faults raised by the store/service layer
//! - `AppError`: HTTP-facing errors produced by handlers
//!
//! Not-found is deliberately *not* a `DomainError` variant: the service
//! signals absence with `Option`, and only the handler turns it into a
//! 404. Every failure response carries the `{success: false, error}`
//! envelope the client branches on.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Store and service layer faults
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Caller-correctable input problem (missing field, rating range)
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),
}

/// Failure envelope body: `{success: false, error}`
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            // Validation and not-found are normal negative outcomes,
            // never logged as faults.
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error,
        });

        (status, body).into_response()
    }
}
