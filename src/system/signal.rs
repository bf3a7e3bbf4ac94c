use tokio::signal;
use tracing::{error, warn};

/// Resolves once Ctrl+C (or SIGTERM on unix) is received
pub async fn wait_for_signal() {
    #[cfg(unix)]
    {
        let mut term = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(term) => term,
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                wait_ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = wait_ctrl_c() => {}
            _ = term.recv() => warn!("SIGTERM received"),
        }
    }

    #[cfg(not(unix))]
    wait_ctrl_c().await;

    warn!("Shutdown signal received, stopping server...");
}

async fn wait_ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
