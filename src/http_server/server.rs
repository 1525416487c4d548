//! # HTTP Server
//!
//! Main HTTP server wrapping the persona routes.
//!
//! Owns the one `PersonaStore` of the process and hands it to the handler.

use std::any::Any;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::{HeaderValue, Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as CorsAny, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::rest_api::{InMemoryPersonaHandler, PersonaHandler, RestError, RestServer};
use crate::store::PersonaStore;

use super::config::HttpServerConfig;

/// HTTP Server for the persona API
pub struct HttpServer {
    config: HttpServerConfig,
    store: Arc<PersonaStore>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let store = Arc::new(PersonaStore::new());
        let handler = InMemoryPersonaHandler::new(Arc::clone(&store));
        let router = build_router(&config, handler);
        Self {
            config,
            store,
            router,
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The store backing this server
    pub fn store(&self) -> &Arc<PersonaStore> {
        &self.store
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server, running until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        info!(
            addr = %listener.local_addr()?,
            base_path = %self.config.base_path,
            "persona API listening"
        );
        info!("health check: {}/personas/health", self.config.base_path);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("persona API stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the complete router around a handler
pub fn build_router<H: PersonaHandler + 'static>(config: &HttpServerConfig, handler: H) -> Router {
    let routes = RestServer::new(handler).router();

    let router = if config.base_path.is_empty() {
        Router::new().merge(routes)
    } else {
        Router::new().nest(&config.base_path, routes)
    };

    router
        .fallback(route_not_found)
        // Innermost so the trace layer records the 500 it produces
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            info_span!(
                "request",
                id = %Uuid::new_v4(),
                method = %request.method(),
                uri = %request.uri()
            )
        }))
        .layer(cors_layer(&config.cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(CorsAny)
            .allow_methods(CorsAny)
            .allow_headers(CorsAny);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(CorsAny)
        .allow_headers(CorsAny)
}

async fn route_not_found(method: Method, uri: Uri) -> RestError {
    RestError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "request handler panicked".to_string()
    };

    RestError::Internal(detail).into_response()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
