use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

use crate::config::Config;

/// Shared application state — cheap to clone, handed to every handler.
/// Holds the connection settings only; each request opens its own
/// connection (see `db::connect`), so there is no pool in here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/", get(handlers::home))
        .route("/test-db-connection", get(handlers::test_db_connection))

        // ── Writes ──────────────────────────────────────────────────────────
        .route("/departments", post(handlers::departments::create_department))
        .route("/products", post(handlers::products::create_products))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
