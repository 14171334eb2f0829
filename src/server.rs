use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::from_config(Arc::clone(&config))?;

    info!(
        name: "catalogue.ready",
        categories = state.catalogue.len(),
        source = %config
            .catalogue
            .path
            .as_ref()
            .map_or_else(|| "bundled".to_string(), |p| p.display().to_string()),
        "Catalogue ready"
    );

    let sweeper = state.sessions.spawn_sweeper(
        Duration::from_secs(config.session.sweep_interval_secs),
        Duration::from_secs(config.session.idle_timeout_secs),
    );

    let app = crate::web::router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
}
