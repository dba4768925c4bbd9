//! # HTTP Server
//!
//! Main HTTP server combining the book and observability routers.

use std::io;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::book_routes::{book_routes, BookState};
use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;
use crate::store::BookStore;

/// HTTP server for the book API
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<BookState>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration and a seeded store
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default(), BookStore::seeded())
    }

    /// Create a new HTTP server with custom configuration.
    ///
    /// `store` is moved into the server; it is the only instance handlers see.
    pub fn with_config(config: HttpServerConfig, store: BookStore) -> Self {
        let state = Arc::new(BookState::new(store));
        let router = Self::build_router(&config, state.clone());
        Self {
            config,
            state,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<BookState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| match s.parse::<HeaderValue>() {
                    Ok(origin) => Some(origin),
                    Err(_) => {
                        warn!(origin = %s, "ignoring unparsable CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(observability_routes(state.clone()))
            .merge(book_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared state (for testing)
    pub fn state(&self) -> Arc<BookState> {
        self.state.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and serve until ctrl-c
    pub async fn start(self) -> Result<(), io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;
        info!(%addr, "book API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("book API stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:8084");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config, BookStore::empty());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:3000".to_string(), "\n".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config, BookStore::seeded()).router();
    }

    #[tokio::test]
    async fn test_state_owns_store() {
        let server = HttpServer::with_config(HttpServerConfig::default(), BookStore::empty());
        let state = server.state();
        assert!(state.store.read().await.is_empty());
    }
}
