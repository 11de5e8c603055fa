use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rollcall_core::error::CoreError;
use rollcall_core::matching::MatchError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for pipeline errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A pipeline error from `rollcall_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message (e.g. unreadable multipart).
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
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Decode(msg) => {
                    tracing::error!(error = %msg, "Uploaded photo could not be decoded");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DECODE_ERROR",
                        format!("Uploaded photo could not be decoded: {msg}"),
                    )
                }
                CoreError::Remote(err) => classify_match_error(err),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a matching-service failure into an HTTP status, error code, and
/// message.
///
/// - Throttling and outages (including timeouts) map to 503.
/// - Every other remote failure maps to 502.
///
/// The remote cause is passed through to the caller in both cases.
fn classify_match_error(err: &MatchError) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Face matching failed");
    if err.is_unavailable() {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "REMOTE_SERVICE_UNAVAILABLE",
            err.to_string(),
        )
    } else {
        (
            StatusCode::BAD_GATEWAY,
            "REMOTE_SERVICE_ERROR",
            err.to_string(),
        )
    }
}
