//! Serving loop and process shutdown.

use crate::api;
use crate::db::TodoStore;
use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

/// Serve the API until `shutdown` resolves, then release the pool.
///
/// The pool is closed whether the server stopped cleanly or with an error.
pub async fn run<F>(listener: TcpListener, store: Arc<dyn TodoStore>, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = api::create_router(api::AppState::new(store.clone()));

    info!("Server listening on {}", listener.local_addr()?);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    store.close().await;
    info!("Database connections closed");

    served
}

/// Install the signal handlers and return a future resolving on Ctrl+C or SIGTERM.
///
/// SIGTERM is registered before returning, so a signal delivered before the
/// future is first polled is not lost.
pub fn shutdown_signal() -> io::Result<impl Future<Output = ()> + Send + 'static> {
    #[cfg(unix)]
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;

    Ok(async move {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                error!(error = %e, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async move {
            sigterm.recv().await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                warn!("Received Ctrl+C, initiating graceful shutdown...");
            }
            _ = terminate => {
                warn!("Received SIGTERM, initiating graceful shutdown...");
            }
        }
    })
}
