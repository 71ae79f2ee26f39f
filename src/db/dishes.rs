//! Dish queries

use sqlx::SqlitePool;

use crate::models::{Dish, DishUpdate};

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Dish>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM dishes ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Dish>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM dishes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a new dish. Returns the new row id.
pub async fn create(
    pool: &SqlitePool,
    name: &str,
    description: &str,
    price: f64,
) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("INSERT INTO dishes (name, description, price) VALUES (?, ?, ?)")
        .bind(name)
        .bind(description)
        .bind(price)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.last_insert_rowid())
}

/// Partial update; omitted fields keep their stored values.
/// Returns false when no row has this id.
pub async fn update(pool: &SqlitePool, id: i64, data: &DishUpdate) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE dishes SET
            name = COALESCE(?, name),
            description = COALESCE(?, description),
            price = COALESCE(?, price)
        WHERE id = ?
        "#,
    )
    .bind(data.name.as_deref())
    .bind(data.description.as_deref())
    .bind(data.price)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}

/// Delete a dish. Returns false when no row has this id.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM dishes WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}
