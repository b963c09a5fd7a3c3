use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller-correctable payload problem, reported with a stable code.
    #[error("Bad request ({code}): {message}")]
    BadRequest { code: &'static str, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Concurrency conflict: {0}")]
    ConcurrencyConflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ApiError::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, *code, message.clone())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::ConcurrencyConflict(msg) => {
                (StatusCode::CONFLICT, "concurrency_conflict", msg.clone())
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                )
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Rejected(rejection) => ApiError::BadRequest {
                code: rejection.code(),
                message: rejection.message(),
            },
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::ConcurrencyConflict { id } => ApiError::ConcurrencyConflict(format!(
                "Game night {} was changed by another request; reload it and retry",
                id
            )),
            DomainError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Malformed or mistyped request bodies.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            code: "validation_error",
            message: rejection.body_text(),
        }
    }
}
