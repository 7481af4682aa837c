//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::router::{health_routes, not_found};
use crate::core::module::Module;
use anyhow::{Result, bail};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for creating HTTP servers with registered resource routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .register_module(RestaurantModule::in_memory())
///     .build()?;
/// ```
pub struct ServerBuilder {
    entity_registry: EntityRegistry,
    modules: Vec<Arc<dyn Module>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            entity_registry: EntityRegistry::new(),
            modules: Vec::new(),
        }
    }

    /// Register a module and the routes of all its resources
    pub fn register_module(mut self, module: impl Module + 'static) -> Self {
        let module = Arc::new(module);
        module.register_entities(&mut self.entity_registry);

        tracing::debug!(
            module = module.name(),
            version = module.version(),
            entities = ?module.entity_types(),
            "module registered"
        );

        self.modules.push(module);
        self
    }

    /// Build the final router
    ///
    /// This merges the health check routes with the resource routes of
    /// every registered module, and wraps everything in request tracing and permissive CORS. Paths
    /// that match nothing answer with a JSON 404.
    pub fn build(self) -> Result<Router> {
        if self.modules.is_empty() {
            bail!("No module registered. Call .register_module()");
        }

        let app = health_routes().merge(self.entity_registry.build_routes());

        Ok(app.fallback(not_found).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        ))
    }

    /// Resource URL prefixes that `build` will serve
    pub fn resource_paths(&self) -> Vec<String> {
        self.entity_registry.resource_paths()
    }

    /// Bind `addr` and serve until Ctrl+C or SIGTERM
    pub async fn serve(self, addr: &str) -> Result<()> {
        let resources = self.resource_paths();
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!(?resources, "Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
