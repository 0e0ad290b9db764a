//! Mapping of domain failures onto HTTP responses

use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Body is missing, not JSON, or has mistyped fields
    #[error("{}", MALFORMED_BODY_MESSAGE)]
    MalformedBody,
}

pub const MALFORMED_BODY_MESSAGE: &str = "Request body must be valid JSON";

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        ApiError::MalformedBody
    }
}

/// JSON body extractor whose rejections go through [`ApiError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::Validation(_))
            | ApiError::Domain(DomainError::ConstraintViolation(_))
            | ApiError::MalformedBody => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::Domain(DomainError::NotFound(entity)) => {
                json!({ "error": format!("{} not found", entity) })
            }
            ApiError::Domain(DomainError::Validation(errors)) => json!({ "errors": errors }),
            ApiError::Domain(DomainError::ConstraintViolation(msg)) => json!({ "errors": [msg] }),
            ApiError::MalformedBody => json!({ "errors": [MALFORMED_BODY_MESSAGE] }),
            ApiError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                json!({ "error": "Database error" })
            }
        };
        (status, Json(body)).into_response()
    }
}
