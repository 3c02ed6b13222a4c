// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    NotFound,
    InvalidInput,
    Unprocessable,
    Internal,
}

impl ApiErrorCode {
    pub fn status_code(self) -> StatusCode {
        match self {
            ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ApiErrorCode::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error type (FastAPI-compatible `{"detail": ...}` body)
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[error("{detail}")]
pub struct ApiError {
    /// Error detail message
    pub detail: String,

    /// Error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ApiErrorCode>,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            code: None,
            details: None,
        }
    }

    pub fn with_code(mut self, code: ApiErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        let resource = resource.into();
        let id = id.into();
        Self::new(format!("{} '{}' not found", resource, id))
            .with_code(ApiErrorCode::NotFound)
            .with_details(serde_json::json!({
                "resource": resource,
                "id": id
            }))
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(message).with_code(ApiErrorCode::InvalidInput)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(message).with_code(ApiErrorCode::Unprocessable)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message).with_code(ApiErrorCode::Internal)
    }

    /// HTTP status for this error; uncoded errors are 500
    pub fn status_code(&self) -> StatusCode {
        self.code
            .map(ApiErrorCode::status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Convert service layer errors to API errors
impl From<matmem_services::ServiceError> for ApiError {
    fn from(err: matmem_services::ServiceError) -> Self {
        use matmem_services::ServiceError;

        match err {
            ServiceError::NotFound { resource, id } => ApiError::not_found(resource, id),
            ServiceError::InvalidInput(msg) => ApiError::invalid_input(msg),
            ServiceError::Unprocessable(msg) => ApiError::unprocessable(msg),
            ServiceError::Internal(msg) => ApiError::internal(msg),
        }
    }
}

/// Malformed or mistyped JSON bodies are client errors
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::invalid_input(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(target: "matmem-api", "{} {}", status, self.detail);
        } else {
            tracing::debug!(target: "matmem-api", "{} {}", status, self.detail);
        }
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matmem_services::ServiceError;

    #[test]
    fn test_service_error_status_mapping() {
        let cases = [
            (
                ServiceError::NotFound {
                    resource: "Material".into(),
                    id: "glass".into(),
                },
                StatusCode::NOT_FOUND,
            ),
            (ServiceError::InvalidInput("bad".into()), StatusCode::BAD_REQUEST),
            (
                ServiceError::Unprocessable("flat".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ServiceError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_not_found_body_shape() {
        let body = serde_json::to_value(ApiError::not_found("Material", "glass")).unwrap();
        assert_eq!(body["detail"], "Material 'glass' not found");
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["details"]["id"], "glass");
    }

    #[test]
    fn test_uncoded_error_is_internal() {
        let err = ApiError::new("unexpected");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "unexpected");
    }
}
