use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use clario_core::error::CoreError;
use clario_mail::MailError;
use serde_json::json;

/// Message returned for any delivery failure that is not a configuration problem.
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send email";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce `{ "detail": ..., "code": ... }`
/// JSON error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `clario_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An outbound email failure from `clario_mail`.
    #[error(transparent)]
    Mail(#[from] MailError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    msg.clone(),
                ),
                CoreError::Conversion(msg) | CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Mail errors ---
            AppError::Mail(err) if err.is_configuration() => {
                tracing::error!(error = %err, "Mail delivery is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    err.to_string(),
                )
            }
            AppError::Mail(err) => {
                tracing::error!(error = %err, "Mail delivery failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DELIVERY_FAILED",
                    DELIVERY_FAILED_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "detail": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
