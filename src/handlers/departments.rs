use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use sqlx::Connection;
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult},
    models::CreateDepartment,
    AppState,
};

pub async fn create_department(
    State(state): State<AppState>,
    payload: Result<Json<CreateDepartment>, JsonRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    // A missing body, malformed JSON, or an absent key all land here; the
    // database is never touched on this path.
    let Json(payload) = payload.map_err(|_| {
        AppError::BadRequest(
            "Incomplete data: 'department_id' and 'department_name' are required.".to_string(),
        )
    })?;

    let mut conn = db::connect(&state.config).await?;
    db::insert_department(&mut conn, &payload).await?;
    conn.close().await?;

    info!(
        department_id = payload.department_id,
        name = %payload.department_name,
        "Inserted department"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": format!(
                "Department '{}' created successfully.",
                payload.department_name
            ),
        })),
    ))
}
