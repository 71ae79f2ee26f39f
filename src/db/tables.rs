//! Table queries

use sqlx::SqlitePool;

use crate::models::{Table, TableUpdate};

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Table>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM tables ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Table>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM tables WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a new table. `table_number` is UNIQUE; a duplicate surfaces as a
/// database error classified upstream as a conflict.
pub async fn create(
    pool: &SqlitePool,
    table_number: i64,
    seating_capacity: i64,
    is_available: bool,
) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO tables (table_number, seating_capacity, is_available) VALUES (?, ?, ?)",
    )
    .bind(table_number)
    .bind(seating_capacity)
    .bind(is_available)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(result.last_insert_rowid())
}

/// Partial update; omitted fields keep their stored values.
/// Returns false when no row has this id.
pub async fn update(pool: &SqlitePool, id: i64, data: &TableUpdate) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE tables SET
            table_number = COALESCE(?, table_number),
            seating_capacity = COALESCE(?, seating_capacity),
            is_available = COALESCE(?, is_available)
        WHERE id = ?
        "#,
    )
    .bind(data.table_number)
    .bind(data.seating_capacity)
    .bind(data.is_available)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}

/// Delete a table. Returns false when no row has this id.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM tables WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}
