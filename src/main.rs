use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use job_assist::core::config::{AppPaths, ConfigService};
use job_assist::core::logging;
use job_assist::server::router::router;
use job_assist::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let paths = Arc::new(AppPaths::new());
    let config_service = ConfigService::new(paths.clone());
    let config = config_service
        .load_app_config()
        .context("Failed to load configuration")?;

    logging::init(&paths, &config.logging);
    tracing::info!(
        "Loaded configuration from {}",
        config_service.config_path().display()
    );

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::initialize(config, &paths).await?;

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    let addr = listener.local_addr()?;
    tracing::info!("Listening on {}", addr);

    let app: Router = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
