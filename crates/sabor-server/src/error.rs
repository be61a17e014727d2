//! Error handling for the API.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::json::ErrorResponse;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Lookup miss.
    #[error("Restaurant not found: {0}")]
    NotFound(String),

    /// Duplicate restaurant name.
    #[error("A restaurant named '{0}' already exists")]
    Conflict(String),

    /// Input failed validation.
    #[error("{0}")]
    Validation(String),

    /// Request could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ErrorResponse {
            error: true,
            code: code.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sabor_core::Error> for AppError {
    fn from(err: sabor_core::Error) -> Self {
        match err {
            sabor_core::Error::NotFound(name) => AppError::NotFound(name),
            sabor_core::Error::Conflict(name) => AppError::Conflict(name),
            sabor_core::Error::Validation(msg) => AppError::Validation(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: AppError = sabor_core::Error::NotFound("Kfc".into()).into();
        assert_eq!(err.status_and_code().0, StatusCode::NOT_FOUND);

        let err: AppError = sabor_core::Error::Conflict("Kfc".into()).into();
        assert_eq!(err.status_and_code().0, StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "A restaurant named 'Kfc' already exists");

        let err: AppError = sabor_core::Error::Validation("bad".into()).into();
        assert_eq!(err.status_and_code().1, "VALIDATION_ERROR");

        let err = AppError::BadRequest("bad body".into());
        assert_eq!(err.status_and_code(), (StatusCode::BAD_REQUEST, "BAD_REQUEST"));
    }
}
