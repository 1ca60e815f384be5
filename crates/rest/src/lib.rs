//! # advocate-rest - HTTP API for the advocate directory
//!
//! This crate exposes the advocate directory over HTTP with [axum]. Listing
//! requests carry a page number, a page size and an optional free-text
//! search term; the term is parsed and compiled by `advocate-persistence`
//! and executed by the configured storage backend.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use advocate_rest::{create_app_with_config, ServerConfig};
//! use advocate_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("advocates.db")?;
//!     backend.init_schema()?;
//!
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(Arc::new(backend), config)?;
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/advocates?page&pageSize&searchTerm` | One page of matching advocates |
//! | POST | `/api/seed` | Validate and insert one advocate |
//! | GET | `/health` | Health check including storage |
//! | GET | `/_liveness` | Liveness probe |
//!
//! ## Search Terms
//!
//! | Term | Meaning |
//! |------|---------|
//! | `Depression AND Anxiety` | both terms match |
//! | `PTSD OR Trauma` | either term matches |
//! | `NOT CBT` | the term does not match |
//! | `Depression AND Anxiety NOT PTSD` | group, then exclusion |
//!
//! Each term is matched case-insensitively as a substring of the first name,
//! last name, city, degree or specialties.
//!
//! ## Error Handling
//!
//! Errors are returned as `{"error": "..."}` JSON bodies. See [`error`].
//!
//! ## Architecture
//!
//! - [`error`] - Error types and their JSON bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (repository, validator, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for paging and search parameters
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use advocate_persistence::core::RecordStorage;
use advocate_persistence::types::NewAdvocate;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: Arc<S>) -> RestResult<Router>
where
    S: RecordStorage<NewRecord = NewAdvocate> + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Fails when `storage` lacks a capability the repository needs.
pub fn create_app_with_config<S>(storage: Arc<S>, config: ServerConfig) -> RestResult<Router>
where
    S: RecordStorage<NewRecord = NewAdvocate> + 'static,
{
    info!(
        backend = storage.name(),
        "Creating advocate API with backend"
    );

    let state = AppState::new(storage, config)?;
    Ok(create_app_with_state(state))
}

/// Creates the Axum application from prepared state.
pub fn create_app_with_state<S>(state: AppState<S>) -> Router
where
    S: RecordStorage<NewRecord = NewAdvocate> + 'static,
{
    let config = state.config().clone();
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
///
/// The API only serves `GET` and `POST` with JSON bodies, so methods and
/// headers are fixed; origins come from `cors_origins`.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers([http::header::CONTENT_TYPE, http::header::ACCEPT]);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<http::HeaderValue> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `level` when set. Call once at startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "advocate_rest={level},advocate_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

