mod grpc;

pub use grpc::{http_status_for, parse_validation_errors};

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error envelope returned by every failing HTTP endpoint.
///
/// ```json
/// {
///   "status": "error",
///   "code": 404,
///   "message": "Failed to retrieve stream",
///   "details": "stream 7 not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `"error"`
    pub status: String,
    /// HTTP status code, repeated in the body for clients that lose the header
    pub code: u16,
    /// What the endpoint was trying to do
    pub message: String,
    /// Message of the underlying failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<String>>,
}

/// Error type for HTTP handlers fronting gRPC calls.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request format: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Invalid query: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// A failed call, reported under `message` with the HTTP status derived from its code.
    #[error("{message}: {status}")]
    Grpc {
        message: String,
        status: tonic::Status,
        with_validation_errors: bool,
    },
}

impl AppError {
    pub fn grpc(message: impl Into<String>, status: tonic::Status) -> Self {
        AppError::Grpc {
            message: message.into(),
            status,
            with_validation_errors: false,
        }
    }

    /// Like [`AppError::grpc`], additionally listing individual issues for
    /// `INVALID_ARGUMENT` failures.
    pub fn grpc_with_validation(message: impl Into<String>, status: tonic::Status) -> Self {
        AppError::Grpc {
            message: message.into(),
            status,
            with_validation_errors: true,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::QueryExtractorRejection(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Grpc { status, .. } => http_status_for(status.code()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        let body = match self {
            AppError::JsonExtractorRejection(rejection) => {
                tracing::warn!("Invalid request format: {}", rejection.body_text());
                ErrorResponse {
                    status: "error".to_string(),
                    code: code.as_u16(),
                    message: "Invalid request format".to_string(),
                    details: Some(rejection.body_text()),
                    validation_errors: None,
                }
            }
            AppError::QueryExtractorRejection(rejection) => {
                tracing::warn!("Invalid query: {}", rejection.body_text());
                ErrorResponse {
                    status: "error".to_string(),
                    code: code.as_u16(),
                    message: "Invalid query parameters".to_string(),
                    details: Some(rejection.body_text()),
                    validation_errors: None,
                }
            }
            AppError::BadRequest(message) => {
                tracing::info!("Bad request: {}", message);
                ErrorResponse {
                    status: "error".to_string(),
                    code: code.as_u16(),
                    message,
                    details: None,
                    validation_errors: None,
                }
            }
            AppError::Grpc {
                message,
                status,
                with_validation_errors,
            } => {
                if code.is_server_error() {
                    tracing::error!(
                        grpc_code = ?status.code(),
                        "{}: {}",
                        message,
                        status.message()
                    );
                } else {
                    tracing::warn!(grpc_code = ?status.code(), "{}: {}", message, status.message());
                }
                let validation_errors = (with_validation_errors
                    && status.code() == tonic::Code::InvalidArgument)
                    .then(|| parse_validation_errors(status.message()))
                    .filter(|issues| !issues.is_empty());
                ErrorResponse {
                    status: "error".to_string(),
                    code: code.as_u16(),
                    message,
                    details: Some(status.message().to_string()),
                    validation_errors,
                }
            }
        };

        (code, Json(body)).into_response()
    }
}
