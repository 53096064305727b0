use sqlx::{Connection, PgConnection};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::*;

/// Open one dedicated connection to the configured database.
///
/// Every request acquires its own connection and closes it before the
/// response goes out; there is no pool and no handle reuse across requests.
pub async fn connect(config: &Config) -> AppResult<PgConnection> {
    PgConnection::connect_with(&config.pg_options())
        .await
        .map_err(AppError::Connection)
}

// ── Departments ───────────────────────────────────────────────────────────────

pub async fn insert_department(
    conn: &mut PgConnection,
    payload: &CreateDepartment,
) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO departments (department_id, department_name)
        VALUES ($1, $2)
        "#,
    )
    .bind(payload.department_id)
    .bind(&payload.department_name)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

// ── Products ──────────────────────────────────────────────────────────────────

/// Insert a batch of products inside a single transaction.
///
/// Either every element lands or none do: a failed INSERT or commit drops
/// the transaction, which rolls the earlier rows back. Returns the inserted
/// names in submission order.
pub async fn insert_products(
    conn: &mut PgConnection,
    payloads: &[CreateProduct],
) -> AppResult<Vec<String>> {
    let mut tx = conn.begin().await?;
    let mut inserted = Vec::with_capacity(payloads.len());

    for product in payloads {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                product_category_id,
                product_name,
                product_description,
                product_price,
                product_image
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(product.product_id)
        .bind(product.product_category_id)
        .bind(&product.product_name)
        .bind(&product.product_description)
        .bind(product.product_price)
        .bind(&product.product_image)
        .execute(&mut *tx)
        .await?;

        inserted.push(product.product_name.clone());
    }

    tx.commit().await?;

    Ok(inserted)
}
