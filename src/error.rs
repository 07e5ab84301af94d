//! Application error type and its single translation into HTTP responses.
//!
//! Failures are wrapped into [`AppError`] at the point of detection and travel
//! unchanged to the handler boundary, where [`IntoResponse`] picks the status
//! code. Internal errors never expose their cause to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed client input (400).
    #[error("{message}")]
    Validation {
        message: String,
        details: Option<Value>,
    },

    /// HTTP verb outside the route's allow-list (405).
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Request outlived its deadline (408).
    #[error("Request timed out")]
    Timeout,

    /// Failure reported by an upstream API, already sanitized.
    #[error("{message}")]
    Upstream {
        status: StatusCode,
        message: String,
        details: Option<Value>,
    },

    /// Missing credential or setting needed to reach an upstream (500).
    #[error("{message}")]
    Configuration { message: String },

    /// Anything unexpected. Rendered as a generic 500.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request_with(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::MethodNotAllowed
    }

    pub fn timeout() -> Self {
        Self::Timeout
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
        }
    }

    /// Upstream rejection traced back to the caller's input, e.g. an unsupported TLD.
    pub fn invalid_upstream_input(message: impl Into<String>) -> Self {
        Self::Upstream {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: None,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Upstream { status, .. } => *status,
            AppError::Configuration { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts the error into its wire body.
    pub fn to_error_body(&self) -> ErrorBody {
        match self {
            AppError::Validation { message, details } | AppError::Upstream { message, details, .. } => {
                ErrorBody {
                    message: message.clone(),
                    details: details.clone(),
                }
            }
            AppError::MethodNotAllowed | AppError::Timeout => ErrorBody {
                message: self.to_string(),
                details: None,
            },
            AppError::Configuration { message } => ErrorBody {
                message: message.clone(),
                details: None,
            },
            AppError::Internal(_) => ErrorBody {
                message: "Internal Server Error".to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Internal(e) => tracing::error!(error = ?e, "Unhandled error"),
            AppError::Timeout => tracing::warn!(status = status.as_u16(), "Request timed out"),
            AppError::Upstream { message, .. } | AppError::Configuration { message } => {
                tracing::warn!(status = status.as_u16(), error = %message, "Request failed")
            }
            _ => tracing::debug!(status = status.as_u16(), error = %self, "Request rejected"),
        }

        (status, Json(self.to_error_body())).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        AppError::bad_request_with(
            "Request validation failed",
            json!({ "fields": fields, "errors": errors }),
        )
    }
}
