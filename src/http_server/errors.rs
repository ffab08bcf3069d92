//! # HTTP API Errors
//!
//! Everything a `/requests` handler can fail with, and how each failure is
//! rendered.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::requests::ValidationError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Mandatory fields missing from a creation payload
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Body was not a JSON object of the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Response could not be serialized
    #[error("Failed to encode response: {0}")]
    Encoding(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<&'static str>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let missing_fields = match err {
            ApiError::Validation(v) => v.missing_names(),
            _ => Vec::new(),
        };
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
            missing_fields,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::RequestField;

    #[test]
    fn test_status_codes() {
        let validation = ApiError::from(ValidationError::missing_fields(vec![
            RequestField::GigTitle,
        ]));
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidBody("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Encoding("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_body_names_fields() {
        let err = ApiError::from(ValidationError::missing_fields(vec![
            RequestField::GigTitle,
            RequestField::Client,
        ]));
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();

        assert_eq!(body["error"], "Missing required fields: gigTitle, client");
        assert_eq!(body["code"], 400);
        assert_eq!(body["missingFields"][1], "client");
    }

    #[test]
    fn test_other_errors_omit_missing_fields() {
        let body =
            serde_json::to_value(ErrorResponse::from(&ApiError::InvalidBody("x".into()))).unwrap();
        assert!(body.get("missingFields").is_none());
    }
}
