//! HTTP server bootstrap shared by both service binaries

use crate::config::ServerConfig;
use axum::Router;
use std::net::SocketAddr;
use tracing::{info, warn};

/// Bind `router` to the configured address and serve until Ctrl+C / SIGTERM
pub async fn serve(router: Router, config: &ServerConfig, service_name: &str) -> anyhow::Result<()> {
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        service = service_name,
        version = env!("CARGO_PKG_VERSION"),
        "Server running on http://{}",
        addr
    );

    let service = service_name.to_string();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let signal = shutdown_signal().await;
            info!(service = %service, signal, "Draining in-flight requests");
        })
        .await?;

    info!(service = service_name, "Server shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM and return which one arrived
///
/// A handler that cannot be installed is logged and never fires, so the
/// other signal still works.
pub async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "ctrl_c",
        _ = terminate => "sigterm",
    }
}
