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
    models::CreateProduct,
    AppState,
};

pub async fn create_products(
    State(state): State<AppState>,
    payload: Result<Json<Vec<CreateProduct>>, JsonRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    // Whole-array validation happens up front: if any element is missing a
    // required key the batch is rejected before a connection is opened.
    let Json(products) = payload.map_err(|_| {
        AppError::BadRequest(
            "Expected a JSON array of products; every element requires 'product_id', \
             'product_category_id', 'product_name' and 'product_price'."
                .to_string(),
        )
    })?;

    if products.is_empty() {
        return Err(AppError::BadRequest(
            "Expected at least one product.".to_string(),
        ));
    }

    let mut conn = db::connect(&state.config).await?;
    let inserted = db::insert_products(&mut conn, &products).await?;
    conn.close().await?;

    info!(count = inserted.len(), "Inserted product batch");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": format!("{} products inserted successfully.", inserted.len()),
            "products_inserted": inserted,
        })),
    ))
}
