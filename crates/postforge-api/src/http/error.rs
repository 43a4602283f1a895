//! Application error type mapping to HTTP status codes and envelope format.

use axum::response::{IntoResponse, Response};
use serde_json::json;

use postforge_types::error::{ErrorKind, GenerateError};

use crate::http::response::{ApiErrorDetail, ApiResponse};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub struct AppError(GenerateError);

impl From<GenerateError> for AppError {
    fn from(e: GenerateError) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, kind) = match &self.0 {
            GenerateError::MissingField(_) => ("VALIDATION_ERROR", None),
            e => {
                let kind = e.kind();
                let code = match kind {
                    ErrorKind::Auth => "UPSTREAM_AUTH_ERROR",
                    ErrorKind::Network => "UPSTREAM_NETWORK_ERROR",
                    ErrorKind::Other => "GENERATION_FAILED",
                };
                (code, Some(kind))
            }
        };

        ApiResponse::<serde_json::Value>::failure(ApiErrorDetail {
            code: code.to_string(),
            message: self.0.to_string(),
            details: kind.map(|kind| json!({ "kind": kind })),
        })
        .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use postforge_types::llm::LlmError;

    #[test]
    fn test_missing_field_is_bad_request() {
        let resp = AppError(GenerateError::MissingField("business_type")).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_auth_failure_is_bad_gateway() {
        let resp = AppError(GenerateError::Llm(LlmError::AuthenticationFailed)).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_network_failure_is_bad_gateway() {
        let resp = AppError(GenerateError::Llm(LlmError::Network("refused".to_string())))
            .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_provider_failure_is_internal() {
        let resp = AppError(GenerateError::Llm(LlmError::Provider {
            message: "boom".to_string(),
        }))
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
