//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::AppConfig;
use crate::core::service::GroupService;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(AppConfig::from_yaml_file("rollcall.yaml")?)
///     .with_service(InMemoryGroupService::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: Option<AppConfig>,
    service: Option<Arc<dyn GroupService>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            config: None,
            service: None,
        }
    }

    /// Set the configuration; defaults apply when omitted
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the group service (required)
    pub fn with_service(mut self, service: impl GroupService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Set a group service that is already shared elsewhere
    ///
    /// Useful when the caller keeps a handle to seed or inspect the store.
    pub fn with_shared_service(mut self, service: Arc<dyn GroupService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        let service = self
            .service
            .take()
            .ok_or_else(|| anyhow::anyhow!("GroupService is required. Call .with_service()"))?;
        let config = self.config.take().unwrap_or_default();

        ServerHost::new(config, service)
    }

    /// Build the final REST router
    ///
    /// Convenience method that builds the host and immediately exposes it
    /// via REST.
    pub fn build(self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to `server.host:server.port` from the configuration
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_service(service)
    ///     .serve().await?;
    /// ```
    pub async fn serve(self) -> Result<()> {
        let host = Arc::new(self.build_host()?);
        let addr = host.config.server.address();
        let app = RestExposure::build_router(host)?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

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

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
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
