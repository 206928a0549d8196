//! Axum router configuration with middleware.
//!
//! Routes: `POST /chat`, `OPTIONS /chat`, `GET /health`. Middleware:
//! CORS (explicit origin list from configuration), request tracing.
//!
//! The chat widget is served from the configured web directory when it
//! exists; API routes take priority and unknown paths fall through to
//! `index.html`. Without the directory, only the API is served.

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors.allowed_origins);
    let web_dir = state.config.server.web_dir.clone();

    let mut router = Router::new()
        .route(
            "/chat",
            post(handlers::chat::post_chat).options(handlers::chat::preflight_chat),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "chat widget static serving enabled");
    }

    router
}

/// CORS policy applied to every response: the configured origin list,
/// methods POST/GET/OPTIONS, headers Content-Type/Authorization,
/// max-age 3600, no credentials.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600))
}

/// GET /health - simple liveness probe.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
