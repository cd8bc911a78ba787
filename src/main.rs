// SPDX-License-Identifier: GPL-3.0-only
mod api;
mod config;
mod forms;
mod logging;
mod store;
mod utils;
mod workflow;

#[cfg(test)]
mod test_helpers;

use std::sync::Arc;
use tokio::signal;
use tokio::sync::oneshot;
use tracing::{error, info};

use config::Config;
use logging::setup_logging;
use store::{CafeStore, SqliteCafeStore};
use workflow::{NoticeSlots, WorkflowController};
use api::{HttpServer, PageHandlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    setup_logging(&config.log_level, config.log_json)?;

    info!("Starting cafe-registry v{}", env!("CARGO_PKG_VERSION"));

    // Initialize store
    let store: Arc<dyn CafeStore> = Arc::new(SqliteCafeStore::new(&config.database_path).await?);
    info!("Cafe store initialized at {}", config.database_path.display());

    let controller = WorkflowController::new(store, Arc::new(NoticeSlots::new()));
    let handlers = PageHandlers::new(controller, config.secret_key.clone());

    // Start HTTP server
    let http_server = HttpServer::new(handlers, config.bind_addr);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let mut http_task = tokio::spawn(http_server.serve(async {
        let _ = shutdown_rx.await;
    }));

    info!("All services started. Waiting for shutdown signal...");

    tokio::select! {
        result = &mut http_task => {
            // The server only stops on its own when it fails
            return match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => {
                    error!(error = %e, "HTTP server error");
                    Err(e)
                }
                Err(e) => Err(e.into()),
            };
        }
        result = signal::ctrl_c() => {
            match result {
                Ok(()) => info!("Received shutdown signal (Ctrl+C)"),
                Err(err) => error!(error = %err, "Unable to listen for shutdown signal"),
            }
        }
    }

    info!("Initiating graceful shutdown...");
    let _ = shutdown_tx.send(());
    match http_task.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(error = %e, "HTTP server error during shutdown"),
        Err(e) => error!(error = %e, "HTTP server task failed"),
    }

    info!("Shutdown complete");
    Ok(())
}
