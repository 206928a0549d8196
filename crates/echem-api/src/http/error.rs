//! Application error type mapping to the HTTP responses of the relay.
//!
//! Two failure classes exist and they are translated very differently:
//! validation errors are client-caused and get actionable per-field text
//! with 422; provider errors are upstream failures whose detail must stay
//! server-side -- the client only ever sees the fixed fallback reply with
//! 500 and `error: true`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use echem_core::chat::FALLBACK_REPLY;
use echem_types::chat::ErrorReply;
use echem_types::error::ValidationError;
use echem_types::llm::LlmError;

/// Application-level error for the chat endpoint.
#[derive(Debug)]
pub enum AppError {
    /// Request body failed validation.
    Validation(ValidationError),
    /// The completion provider failed (network, auth, quota, timeout,
    /// malformed response). Already logged where it occurred.
    Provider(LlmError),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Provider(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                let body = json!({
                    "errors": { err.field(): [err.to_string()] }
                });
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            // The variant detail is intentionally dropped here: upstream
            // error text never reaches the client.
            AppError::Provider(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorReply::fallback(FALLBACK_REPLY)),
            )
                .into_response(),
        }
    }
}
