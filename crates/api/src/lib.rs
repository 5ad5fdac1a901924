//! # Sistema Acadêmico API
//!
//! The API crate provides the web server for the class schedule service.
//! It exposes RESTful endpoints that let the administrative forms create,
//! edit, delete and list weekly class slots.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into slot manager calls
//! - **Middleware**: Map domain errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! Overlap validation and ordering live in `academico-core`; the record store
//! is chosen at startup (PostgreSQL or in-memory).

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use academico_core::{manager::ScheduleSlotManager, store::SlotStore};
use axum::Router;
use eyre::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Validates and persists slots through the configured record store
    pub manager: ScheduleSlotManager,
}

/// Builds the application router over the given state
///
/// Kept separate from [`start_server`] so tests can drive the router
/// without binding a socket.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Class slot endpoints
        .merge(routes::slot::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and record store
///
/// This function initializes logging, wires the slot manager with the
/// configured scope key, applies CORS and timeout layers and serves HTTP.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and scope key
/// * `store` - Record store the slot manager reads from and writes to
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn SlotStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Slots scoped by {} and weekday", config.scope_key);
    let manager = ScheduleSlotManager::new(store, config.scope_key);
    let state = Arc::new(ApiState { manager });

    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<Result<Vec<axum::http::HeaderValue>, _>>()?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(
                |_: tower::BoxError| async { axum::http::StatusCode::REQUEST_TIMEOUT },
            ))
            .timeout(std::time::Duration::from_secs(config.request_timeout))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
