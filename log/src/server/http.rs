//! HTTP server implementation for proglog.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::signal;

use super::config::LogServerConfig;
use super::handlers::{AppState, handle_consume, handle_produce};
use super::middleware::TracingLayer;
use crate::{Log, Result};

/// Build the router serving `POST /` and `GET /` against `log`.
pub fn build_router(log: Arc<Log>) -> Router {
    let state = AppState { log };

    Router::new()
        .route("/", post(handle_produce).get(handle_consume))
        .layer(TracingLayer::new())
        .with_state(state)
}

/// HTTP server for the log service.
pub struct LogServer {
    log: Arc<Log>,
    config: LogServerConfig,
}

impl LogServer {
    /// Create a new log server.
    pub fn new(log: Arc<Log>, config: LogServerConfig) -> Self {
        Self { log, config }
    }

    /// Build the router for this server's log.
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.log))
    }

    /// Run the HTTP server until SIGINT or SIGTERM is received.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the listener cannot be
    /// bound or the server fails while serving.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` completes.
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        tracing::info!("Starting Log HTTP server on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server shut down gracefully");
        Ok(())
    }
}

/// Listen for SIGTERM and SIGINT (Ctrl+C).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
