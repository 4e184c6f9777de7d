// ABOUTME: HTTP server bootstrap with graceful shutdown and background session cleanup
// ABOUTME: Binds the configured address and serves the application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use crate::routes;
#[cfg(not(unix))]
use std::future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::time;
use tracing::{debug, error, info};

/// How often expired sessions are swept out of memory
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

/// Serve the API until SIGINT or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn serve(resources: Arc<ServerResources>) -> AppResult<()> {
    let addr = format!(
        "{}:{}",
        resources.config.http_host, resources.config.http_port
    );
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::config(format!("Failed to bind {addr}: {e}")))?;
    info!(address = %addr, "HTTP server listening");

    let sweeper = tokio::spawn(sweep_sessions(Arc::clone(&resources)));
    let app = routes::router(resources);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await;
    sweeper.abort();

    served.map_err(|e| AppError::internal(format!("HTTP server failed: {e}")))?;
    info!("HTTP server stopped");
    Ok(())
}

async fn sweep_sessions(resources: Arc<ServerResources>) {
    let mut interval = time::interval(SESSION_SWEEP_INTERVAL);
    loop {
        interval.tick().await;
        let removed = resources.sessions.purge_expired().await;
        debug!(removed, "Session sweep finished");
    }
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT"),
        () = terminate => info!("Received SIGTERM"),
    }

    info!("Shutting down gracefully, draining in-flight requests");
}
