//! OS signal handling.

use crate::lifecycle::Shutdown;

/// Wait for Ctrl+C and trigger the shutdown broadcast.
pub async fn trigger_on_ctrl_c(shutdown: Shutdown) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
        Err(error) => {
            tracing::error!(%error, "Failed to install Ctrl+C handler");
        }
    }
}
