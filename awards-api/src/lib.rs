//! awards-api library - Awarded producer interval service
//!
//! Loads the nomination CSV into SQLite and serves the producer
//! win-interval report over HTTP.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

pub mod api;
pub mod error;
pub mod ingest;
pub mod intervals;
pub mod store;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route(
            "/api/movies/awarded-producer",
            get(api::get_awarded_producer),
        )
        .merge(api::health_routes())
        // Enable CORS for local access
        .layer(CorsLayer::permissive())
        .with_state(state)
}
