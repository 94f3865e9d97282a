//! Application configuration builders.

use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::warn;

use numstat_core::config::ServerConfig;

/// Load configuration from `.env` and environment variables.
pub fn load_config() -> numstat_core::Config {
    numstat_core::config::load_dotenv();
    numstat_core::Config::from_env()
}

/// CORS layer for the configured origin. `*` allows any origin.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allows_any_origin() {
        return CorsLayer::permissive();
    }

    match server.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET]),
        Err(e) => {
            warn!(
                "Invalid CORS_ORIGIN '{}': {} — cross-origin requests disabled",
                server.cors_origin, e
            );
            CorsLayer::new()
        }
    }
}
