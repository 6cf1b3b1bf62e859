//! article-server: HTTP API server for the articles service
//!
//! This crate provides:
//! - REST endpoints for creating, updating, searching and paging articles
//! - JSON error responses with stable error codes
//! - Request/response logging with sensitive-field redaction
//! - Request ID generation and propagation
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing spans
//! - CORS handling
//! - Request ID generation
//! - Body-buffering exchange logs
//!
//! # Usage
//!
//! ```rust,ignore
//! use article_server::{build_app, config::ServerConfig, state::AppState};
//! use article_store::ArticleStore;
//!
//! let config = ServerConfig::from_env()?;
//! let app = build_app(AppState::new(ArticleStore::new(), config))?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{Router, extract::DefaultBodyLimit};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// Re-exports for convenience
pub use config::{ConfigError, LogFormat, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use article_store;

use crate::middleware::{
    logging::log_exchange,
    request_id::{propagate_request_id, request_id_layer},
};

/// Build the router with the full middleware stack.
///
/// Layers, outermost first: trace span, CORS, request id generation,
/// request id propagation, body limit, exchange logging.
pub fn build_app(state: AppState) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(state.config())?;
    let max_body_bytes = state.config().max_body_bytes;

    Ok(routes::build_router(state.clone())
        .layer(axum::middleware::from_fn_with_state(state, log_exchange))
        // Raises the extractors' built-in 2 MiB limit to the configured cap;
        // without it, bodies between 2 MiB and `max_body_bytes` pass
        // `log_exchange` and are then refused by `JsonBody`.
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(axum::middleware::from_fn(propagate_request_id))
        .layer(request_id_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Build CORS layer from configuration.
fn build_cors_layer(config: &ServerConfig) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    Ok(match config.cors_origins()? {
        None => layer.allow_origin(Any),
        Some(origins) => layer.allow_origin(origins),
    })
}
