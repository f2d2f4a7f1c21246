pub mod config;
pub mod rest;

use std::sync::Arc;

use axum::{routing::get, Router};

use document_client::DocumentClient;

pub use config::GatewayConfig;
pub use rest::GatewayError;

pub struct AppState {
    pub documents: DocumentClient,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        .route("/documents/{id}", get(rest::api_document))
        .with_state(state)
        // Method + path + status + latency only
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }),
        )
}
