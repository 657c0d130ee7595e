//! Serve command - Starts the HTTP server.

use common::{AppError, AppResult};
use domain::Hasher;

use crate::cli::ServeArgs;
use crate::config::WebConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: WebConfig) -> AppResult<()> {
    let config = config.with_addr(args.host, args.port);

    // Capability probe runs once, before any request is accepted
    let hasher = Hasher::probe(&config.hasher)?;
    tracing::info!(
        service = %config.service.service_name,
        "Hashing with {}",
        hasher.algorithm()
    );

    let addr = config.service.addr();
    let service = config.service.service_name.clone();
    let app = create_router(AppState::from_hasher(hasher, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!(service = %service, "Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
