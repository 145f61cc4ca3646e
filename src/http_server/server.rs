//! # HTTP Server
//!
//! Combines the health and book routers behind CORS and request tracing.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::book_routes::book_routes;
use super::health_routes::health_routes;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::store::BookStore;

/// HTTP server for the book collection
pub struct HttpServer {
    addr: String,
    router: Router,
}

impl HttpServer {
    /// Create a server over an opened store.
    ///
    /// An empty `cors_origins` allows any origin. Origins that are not valid
    /// header values are logged and skipped.
    pub fn new(addr: impl Into<String>, cors_origins: &[String], store: Arc<BookStore>) -> Self {
        let router = Self::build_router(cors_origins, store);
        Self {
            addr: addr.into(),
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(cors_origins: &[String], store: Arc<BookStore>) -> Router {
        let cors = if cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = cors_origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        log_event_with_fields(
                            Event::CorsOriginSkipped,
                            &[("origin", origin.as_str())],
                        );
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
            .merge(health_routes())
            .merge(book_routes(store))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> &str {
        &self.addr
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.addr.as_str()).await?;
        let addr = listener.local_addr()?.to_string();

        log_event_with_fields(Event::Serving, &[("addr", addr.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, keep serving until killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    log_event(Event::ShutdownStart);
}
