pub mod departments;
pub mod products;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use sqlx::Connection;
use tracing::info;

use crate::{db, error::AppResult, AppState};

pub async fn home() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "message": "The API is working correctly." })),
    )
}

/// Open a connection and immediately release it. Transient by design; the
/// only state change is the connection open/close itself.
pub async fn test_db_connection(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let conn = db::connect(&state.config).await?;
    conn.close().await?;

    info!("Database connectivity check passed");

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Database connection successful." })),
    ))
}
