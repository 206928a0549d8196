//! The chat relay endpoint.
//!
//! POST /chat: validate the body, relay to the completion provider,
//! return the reply. OPTIONS /chat: answer CORS preflights (and any
//! other OPTIONS probe) with a fixed OK body.
//!
//! The handler is the trivial two-state machine of the system: it is
//! processing until the single provider call resolves, then done.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};
use tracing::Instrument;
use uuid::Uuid;

use echem_core::validate::validate_message;
use echem_types::chat::ChatReply;

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /chat -- relay one message to the completion provider.
pub async fn post_chat(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ChatReply>, AppError> {
    let message = validate_message(&body)?;

    let request_id = Uuid::now_v7();
    let span = tracing::info_span!("chat_exchange", request_id = %request_id);

    let exchange = async { state.chat_service.ask(&message).await }
        .instrument(span)
        .await?;

    Ok(Json(ChatReply {
        reply: exchange.assistant_reply,
    }))
}

/// OPTIONS /chat -- preflight answer.
///
/// Browser preflights (carrying `Access-Control-Request-Method`) are
/// answered by the CORS layer before reaching this handler; everything
/// else lands here and gets the same 200 with an explicit max-age.
pub async fn preflight_chat() -> impl IntoResponse {
    (
        [(header::ACCESS_CONTROL_MAX_AGE, "3600")],
        Json(json!({ "status": "ok" })),
    )
}
