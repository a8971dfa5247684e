//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Compile the source registry and allowlist into shared state
//! - Create the Axum Router with the relay handler on a catch-all route
//! - Wire up middleware (request ID, tracing, CORS, timeout)
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RelayConfig;
use crate::http::cors;
use crate::http::relay::relay_handler;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::security::Allowlist;
use crate::sources::SourceRegistry;

/// Application state injected into the relay handler.
///
/// Everything here is read-only after startup; requests share it
/// without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub sources: Arc<SourceRegistry>,
    pub allowlist: Arc<Allowlist>,
    pub client: reqwest::Client,
    pub mount_prefix: Arc<str>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a server over the built-in source registry.
    pub fn new(config: RelayConfig) -> Self {
        Self::with_sources(config, SourceRegistry::builtin())
    }

    /// Create a server over an explicit source registry.
    pub fn with_sources(config: RelayConfig, sources: SourceRegistry) -> Self {
        // The allowlist is derived from, but checked independently of,
        // the registry the mapper consults.
        let allowlist = Allowlist::from_registry(&sources);

        let state = AppState {
            sources: Arc::new(sources),
            allowlist: Arc::new(allowlist),
            client: reqwest::Client::new(),
            mount_prefix: config.relay.mount_prefix.as_str().into(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(relay_handler))
            .route("/", any(relay_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(middleware::from_fn(cors::apply_cors))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// Run the server, accepting connections on the given listener,
    /// until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}
