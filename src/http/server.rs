//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Mount the route table as the Axum fallback service
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve on a caller-provided listener
//! - Stop accepting on shutdown and drain in-flight requests

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::dispatch::RouterService;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::routing::Router;

/// HTTP server hosting one route table.
pub struct HttpServer {
    app: axum::Router,
    config: ServerConfig,
    routes: Arc<Router>,
}

impl HttpServer {
    /// Create a server for a fully registered router.
    pub fn new(config: ServerConfig, router: Router) -> Self {
        let routes = Arc::new(router);
        let app = Self::build_app(&config, RouterService::new(Arc::clone(&routes)));
        Self {
            app,
            config,
            routes,
        }
    }

    /// Build the Axum app with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &ServerConfig, service: RouterService) -> axum::Router {
        axum::Router::new()
            .fallback_service(service)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// The assembled app, for in-process testing with `tower::ServiceExt`.
    pub fn app(&self) -> axum::Router {
        self.app.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            name = %self.config.server.name,
            version = %self.config.server.version,
            address = %addr,
            static_routes = self.routes.static_routes().len(),
            templated_routes = self.routes.templates().len(),
            match_policy = ?self.routes.policy(),
            "{} [{}] running",
            self.config.server.name,
            self.config.server.version
        );

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the route table being served.
    pub fn routes(&self) -> &Arc<Router> {
        &self.routes
    }
}
