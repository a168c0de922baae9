//! Server lifecycle: binding, signal handling and graceful shutdown.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::server::error::AppError;

/// Process-wide server lifecycle state.
///
/// Created once at startup. The shutdown token is shared with the signal task, so a
/// termination signal and a fatal serve error both stop the listener the same way.
pub struct Lifecycle {
    shutdown: CancellationToken,
    address: SocketAddr,
}

impl Lifecycle {
    pub fn new(port: u16) -> Self {
        Self {
            shutdown: CancellationToken::new(),
            address: SocketAddr::from(([0, 0, 0, 0], port)),
        }
    }

    /// Token cancelled when the server should stop accepting connections.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Spawns the task cancelling the shutdown token on SIGTERM or Ctrl-C.
    pub fn watch_signals(&self) {
        let shutdown = self.shutdown.clone();

        tokio::spawn(async move {
            shutdown_signal().await;
            shutdown.cancel();
        });
    }

    /// Binds the listener and serves `router` until the shutdown token is cancelled.
    ///
    /// In-flight requests are allowed to finish after cancellation.
    ///
    /// # Returns
    /// - `Ok(())` - The server stopped after a shutdown request
    /// - `Err(AppError::IoErr(_))` - Binding or serving failed; the token is cancelled
    pub async fn serve(self, router: Router) -> Result<(), AppError> {
        let result = self.run(router).await;

        if result.is_err() {
            self.shutdown.cancel();
        }

        result
    }

    async fn run(&self, router: Router) -> Result<(), AppError> {
        let listener = TcpListener::bind(self.address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "Server listening");

        let shutdown = self.shutdown.clone();
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("Graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Waits for SIGTERM or Ctrl-C.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
