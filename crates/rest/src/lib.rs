//! # patienttrack-rest - PatientTrack HTTP API
//!
//! This crate exposes the patient record store over HTTP with JSON bodies.
//! Handlers are thin: they parse the request, call
//! [`PatientService`](patienttrack_persistence::PatientService), and map the
//! result or error to a response.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use patienttrack_rest::{create_app, ServerConfig};
//! use patienttrack_persistence::backends::JsonFileBackend;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Open the data file
//!     let backend = JsonFileBackend::open("patients.json")?;
//!
//!     // Create the Axum application
//!     let app = create_app(backend);
//!
//!     // Start the server
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | banner | GET | `/` |
//! | about | GET | `/about` |
//! | health | GET | `/health` |
//! | view | GET | `/view` |
//! | read | GET | `/patient/[id]` |
//! | sort | GET | `/sort?sort_by=[field]&order=[asc\|desc]` |
//! | create | POST | `/create` |
//! | update | PUT | `/edit/[id]` |
//! | delete | DELETE | `/delete/[id]` |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"detail": ..., "code": ..., "field": ...}`:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid-argument | Bad sort argument or malformed JSON |
//! | 404 | not-found | Patient not found |
//! | 409 | conflict | Patient id already exists |
//! | 415 | not-supported | Body is not `application/json` |
//! | 422 | invalid | Record fails the schema |
//! | 503 | unavailable | Data file missing, unreadable or corrupt |
//!
//! ## Architecture
//!
//! - [`error`] - Error type and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (service, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use patienttrack_persistence::PatientService;
use patienttrack_persistence::core::CollectionStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: CollectionStore + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust
/// use patienttrack_rest::{create_app_with_config, ServerConfig};
/// use patienttrack_persistence::backends::InMemoryBackend;
///
/// let config = ServerConfig {
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(InMemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: CollectionStore + 'static,
{
    create_app_with_service(Arc::new(PatientService::new(store)), config)
}

/// Creates the Axum application over an existing service.
///
/// Useful when the caller keeps its own handle on the service or store.
pub fn create_app_with_service<S>(service: Arc<PatientService<S>>, config: ServerConfig) -> Router
where
    S: CollectionStore + 'static,
{
    info!(
        "Creating PatientTrack API server with backend: {}",
        service.backend_name()
    );

    // Create application state
    let state = AppState::new(service, config.clone());

    // Build the router with all patient routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "patienttrack_rest={level},patienttrack_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
