//! HTTP transport for nafa.
//!
//! ## Routes
//!
//! - `GET /api/journey/{id}` - the journey template with current annotations.
//! - `POST /api/annotation` - store a sensory annotation, body = JSON.
//! - `GET /api/annotations` - every stored annotation, oldest first.
//! - `OPTIONS *` - empty 200 carrying the CORS headers.
//!
//! Any other `/api/*` request answers 404 `{"error":"Not found"}`. Paths
//! outside `/api` answer a plain-text 404. Every response carries the CORS
//! headers.
//!
//! ## Example
//!
//! ```ignore
//! use nafa::{api, Config};
//!
//! let config = Config::load()?;
//! api::serve(&config, api::AppState::new()).await?;
//! ```

mod handlers;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::config::{Config, ServerConfig};
use crate::error::{Error, Result};
use crate::journey::{Journey, JourneyView};
use crate::storage::AnnotationStore;

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<AnnotationStore>,
    journeys: JourneyView,
}

impl AppState {
    /// Fresh state: an empty store and the sample journey.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(Arc::new(AnnotationStore::new()))
    }

    /// State over an existing store.
    #[must_use]
    pub fn with_store(store: Arc<AnnotationStore>) -> Self {
        let journeys = JourneyView::new(Journey::sample(), Arc::clone(&store));
        Self { store, journeys }
    }

    /// The annotation store.
    #[must_use]
    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    /// The journey view.
    #[must_use]
    pub fn journeys(&self) -> &JourneyView {
        &self.journeys
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the axum `Router` for the service.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route(
            "/api/journey/{id}",
            get(handlers::get_journey).fallback(handlers::api_not_found),
        )
        .route(
            "/api/annotation",
            post(handlers::create_annotation).fallback(handlers::api_not_found),
        )
        .route(
            "/api/annotations",
            get(handlers::list_annotations).fallback(handlers::api_not_found),
        )
        .fallback(handlers::fallback)
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static("GET, POST, OPTIONS"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static("Content-Type"),
                ))
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(handlers::preflight))
                .layer(DefaultBodyLimit::max(config.max_body_bytes)),
        )
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: &Config, state: AppState) -> Result<()> {
    let app = router(state, &config.server);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for Ctrl-C, running until killed: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!("Request failed: {self}");
        } else {
            debug!("Request rejected: {self}");
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
