//! Route table and middleware stack.

use std::any::Any;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::GatewayConfig;
use crate::error::ErrorResponse;
use crate::handlers::{self, AppState};
use crate::source::CharacterSource;

/// Builds the gateway router.
///
/// Layers, outermost first: request tracing (one `info` line per response),
/// panic recovery, response compression, CORS.
pub fn router(source: Arc<dyn CharacterSource>, config: &GatewayConfig) -> Router {
    Router::new()
        .route("/characters/", get(handlers::get_character_without_id))
        .route("/characters/{id}", get(handlers::get_character))
        .route("/characters/get/", get(handlers::get_characters_without_ids))
        .route("/characters/get/{ids}", get(handlers::get_characters))
        .route("/characters/search", get(handlers::search_characters))
        .route("/characters/list", get(handlers::list_characters))
        .layer(build_cors_layer(config))
        .layer(CompressionLayer::new())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(AppState::new(source))
}

/// Only the local origin on the configured port is allowed, with credentials.
pub fn build_cors_layer(config: &GatewayConfig) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true);

    let origin = config.cors_origin();
    match HeaderValue::from_str(&origin) {
        // A list, not an exact value: foreign origins get no allow-origin header.
        Ok(value) => layer = layer.allow_origin(AllowOrigin::list([value])),
        Err(e) => tracing::warn!("CORS origin {} is not a valid header: {}", origin, e),
    }
    layer
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("handler panicked: {}", detail);

    let status = StatusCode::INTERNAL_SERVER_ERROR;
    let body = ErrorResponse::new(status, status.canonical_reason().unwrap_or_default());
    (status, Json(body)).into_response()
}
