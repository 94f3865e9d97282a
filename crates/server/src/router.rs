//! HTTP router construction.
//!
//! Assembles the routes and middleware into a single `Router`.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use crate::app_config::cors_layer;
use crate::error;
use crate::state::AppState;
use crate::api;

/// Build the complete application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    with_middleware(routes(), state)
}

fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(api::health))
        // Static routes take precedence over the `{operation}` capture.
        .route("/{operation}", get(api::compute))
        .route("/{operation}/", get(api::compute))
}

/// 404 fallback, panic-to-500 conversion and CORS.
fn with_middleware(routes: Router<Arc<AppState>>, state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.server);

    routes
        .fallback(error::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors)
        .with_state(state)
}
