//! Main webserver implementation
//!
//! Wires the coordinate provider into the axum router and owns the server
//! lifecycle.

use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use shared::service_info;

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::CoordinateProvider;
use crate::web::handlers::{check_landing_zone, health_check, landing_zone_briefing};

/// Main webserver struct with dependency injection
pub struct WebServer<P>
where
    P: CoordinateProvider,
{
    state: Arc<WebServerState>,
    provider: Arc<P>,
    shutdown_tx: Arc<watch::Sender<bool>>,
}

impl<P> Clone for WebServer<P>
where
    P: CoordinateProvider,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            provider: Arc::clone(&self.provider),
            shutdown_tx: Arc::clone(&self.shutdown_tx),
        }
    }
}

impl<P> WebServer<P>
where
    P: CoordinateProvider + 'static,
{
    /// Create a new webserver around a coordinate provider
    pub fn new(provider: P) -> Self {
        let (shutdown_tx, _) = watch::channel(false);

        Self {
            state: Arc::new(WebServerState::new()),
            provider: Arc::new(provider),
            shutdown_tx: Arc::new(shutdown_tx),
        }
    }

    pub fn state(&self) -> &WebServerState {
        &self.state
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/landing-zone", get(landing_zone_briefing))
            .route("/landing-zone/", get(landing_zone_briefing))
            .route("/landing-zone/:zone", get(check_landing_zone::<P>))
            .route("/health", get(health_check::<P>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Ask a running server to stop accepting connections
    pub fn shutdown(&self) {
        self.shutdown_tx.send_replace(true);
    }

    /// Bind `addr` and serve until [`WebServer::shutdown`] is called
    pub async fn run(&self, addr: SocketAddr) -> WebServerResult<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(&self, listener: TcpListener) -> WebServerResult<()> {
        let local_addr = listener.local_addr()?;
        let router = self.build_router();
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        service_info!(
            source = self.provider.source_name(),
            "🌐 Landing zone API listening on http://{}/landing-zone",
            local_addr
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.wait_for(|stopped| *stopped).await;
            })
            .await?;

        Ok(())
    }
}
