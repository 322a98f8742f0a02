use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// The form page renders `user_message()` instead of the JSON body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream error (status {status:?}): {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    #[error("No skills could be extracted from the model response")]
    EmptyResult,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Auth(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Network(_) | AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::EmptyResult => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Auth(_) => "AUTH_ERROR",
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::Upstream { .. } => "UPSTREAM_ERROR",
            AppError::EmptyResult => "EMPTY_RESULT",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the person who submitted the form.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::Auth(_) => {
                "The language model credential is missing or was rejected. \
                 Ask the operator to configure GEMINI_API_KEY."
                    .to_string()
            }
            AppError::Network(_) => {
                "Could not reach the language model service. Please submit again.".to_string()
            }
            AppError::Upstream { .. } => {
                "The language model service returned an error. Please submit again.".to_string()
            }
            AppError::EmptyResult => {
                "No skills could be extracted. Try a longer or more detailed job description."
                    .to_string()
            }
            AppError::Internal(_) => "An internal error occurred.".to_string(),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingCredential => {
                AppError::Auth("no API key configured".to_string())
            }
            LlmError::Unauthorized { status, message } => {
                AppError::Auth(format!("credential rejected (status {status}): {message}"))
            }
            LlmError::Http(e) => {
                if e.is_timeout() {
                    AppError::Network(format!("request timed out: {e}"))
                } else {
                    AppError::Network(e.to_string())
                }
            }
            LlmError::Api { status, message } => AppError::Upstream {
                status: Some(status),
                message,
            },
            LlmError::Parse(e) => AppError::Upstream {
                status: None,
                message: format!("undecodable response: {e}"),
            },
            LlmError::EmptyContent => AppError::EmptyResult,
        }
    }
}

/// Malformed or incomplete request bodies are bad user input, not a server fault.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidInput(_) | AppError::EmptyResult => {
                tracing::info!("Request rejected: {self}")
            }
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ => tracing::error!("{self}"),
        }

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.user_message()
            }
        }));

        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_maps_to_auth() {
        let err = AppError::from(LlmError::MissingCredential);
        assert!(matches!(err, AppError::Auth(_)));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_rejected_credential_maps_to_auth() {
        let err = AppError::from(LlmError::Unauthorized {
            status: 403,
            message: "forbidden".to_string(),
        });
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[test]
    fn test_api_status_maps_to_upstream() {
        let err = AppError::from(LlmError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        match err {
            AppError::Upstream { status, message } => {
                assert_eq!(status, Some(500));
                assert_eq!(message, "boom");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_content_maps_to_empty_result() {
        let err = AppError::from(LlmError::EmptyContent);
        assert!(matches!(err, AppError::EmptyResult));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_user_message_does_not_leak_upstream_detail() {
        let err = AppError::Upstream {
            status: Some(500),
            message: "internal stack trace".to_string(),
        };
        assert!(!err.user_message().contains("stack trace"));
    }

    #[test]
    fn test_invalid_input_message_is_shown_verbatim() {
        let err = AppError::InvalidInput("job description cannot be empty".to_string());
        assert_eq!(err.user_message(), "job description cannot be empty");
        assert_eq!(err.code(), "INVALID_INPUT");
    }
}
