mod api;
mod app_config;
mod cli;
mod error;
mod router;
mod state;

use std::sync::Arc;

use tracing::info;

async fn serve(config: numstat_core::Config) -> anyhow::Result<()> {
    config.log_summary();

    let addr = config.server.bind_addr();
    let port = config.server.port;
    let state = Arc::new(state::AppState::new(config));
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://localhost:{}", port);
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
    error::install_panic_hook();

    let args: Vec<String> = std::env::args().collect();
    if cli::dispatch(&args)? {
        return Ok(());
    }

    let config = app_config::load_config();
    serve(config).await
}
