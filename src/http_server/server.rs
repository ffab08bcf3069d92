//! # HTTP Server
//!
//! Combines the request and observability routers behind one CORS layer.

use std::net::SocketAddr;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event, log_event_with_fields, Event};
use crate::requests::RequestService;

use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;
use super::request_routes::request_routes;

/// HTTP server for the gig request API
pub struct HttpServer {
    config: HttpServerConfig,
    service: RequestService,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server over a fresh store
    pub fn with_config(config: HttpServerConfig) -> Self {
        let service = RequestService::new(config.schema.schema());
        Self::with_service(config, service)
    }

    /// Create a new HTTP server over an existing service
    pub fn with_service(config: HttpServerConfig, service: RequestService) -> Self {
        let router = Self::build_router(&config, service.clone());
        Self {
            config,
            service,
            router,
        }
    }

    fn build_router(config: &HttpServerConfig, service: RequestService) -> Router {
        Router::new()
            .merge(request_routes(service.clone()))
            .merge(observability_routes(service))
            .layer(Self::cors_layer(config))
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        // A literal "*" cannot be part of an origin list.
        let any = config.cors_origins.is_empty() || config.cors_origins.iter().any(|o| o == "*");
        let origin = if any {
            AllowOrigin::from(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            AllowOrigin::list(origins)
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    pub fn service(&self) -> &RequestService {
        &self.service
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(
            Event::ServerStart,
            &[
                ("addr", bound.as_str()),
                ("schema", self.config.schema.as_str()),
            ],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ServerStop);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until the process is killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::{RecordSchema, SchemaVariant};

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
        assert_eq!(server.service().schema(), &RecordSchema::supplier_aware());
    }

    #[test]
    fn test_server_with_custom_port_and_schema() {
        let config = HttpServerConfig::with_port(3000).with_schema(SchemaVariant::Basic);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
        assert_eq!(server.service().schema(), &RecordSchema::basic());
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let mut config = HttpServerConfig::default();
        config.cors_origins = vec!["http://localhost:5173".to_string()];
        let _router = HttpServer::with_config(config).router();
    }
}
