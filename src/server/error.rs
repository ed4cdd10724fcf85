//! HTTP-facing errors.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ValidationError;

/// Error body returned by every failing endpoint that carries messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorPayload {
    pub erros: Vec<String>,
}

/// Errors the controller turns into responses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed body or path, rejected before any dispatch
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Command raised notifications; answered with 400 and the messages
    #[error("Invalid operation: {0:?}")]
    InvalidOperation(Vec<String>),

    /// Command raised notifications; answered with a bare 400
    #[error("Invalid operation")]
    InvalidOperationWithoutBody,

    /// Query raised notifications; answered with 404 and the messages
    #[error("Not found: {0:?}")]
    NotFound(Vec<String>),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidRequest(err.mensagem().to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, erros) = match self {
            Self::InvalidRequest(message) => (StatusCode::BAD_REQUEST, vec![message]),
            Self::InvalidOperation(erros) => (StatusCode::BAD_REQUEST, erros),
            Self::InvalidOperationWithoutBody => return StatusCode::BAD_REQUEST.into_response(),
            Self::NotFound(erros) => (StatusCode::NOT_FOUND, erros),
        };

        (status, Json(ErrorPayload { erros })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let response = ApiError::InvalidRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::NotFound(vec!["x".to_string()]).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::InvalidOperationWithoutBody.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_error_becomes_invalid_request() {
        let mensagem = "O ClienteId não pode ser nulo.";
        let err: ApiError = ValidationError::new("clienteId", mensagem).into();
        assert!(matches!(err, ApiError::InvalidRequest(ref m) if m == mensagem));
    }
}
