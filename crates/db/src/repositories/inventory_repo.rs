//! Repository for the `inventario` table.

use pathfinder_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::inventory::{CreateInventoryItem, InventoryItem};

const COLUMNS: &str = "id, personaje_id, item, cantidad, peso, descripcion, valor, imagen";

/// Provides CRUD operations for character inventory rows.
pub struct InventoryRepo;

impl InventoryRepo {
    /// List all items owned by a character, in insertion order.
    pub async fn list_by_character(
        pool: &SqlitePool,
        personaje_id: DbId,
    ) -> Result<Vec<InventoryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventario WHERE personaje_id = ?1 ORDER BY id");
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(personaje_id)
            .fetch_all(pool)
            .await
    }

    /// Find an inventory row by its ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<InventoryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventario WHERE id = ?1");
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new inventory row, returning its ID.
    ///
    /// The owner id is stored as given; it is not checked against `personajes`.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateInventoryItem,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO inventario (personaje_id, item, cantidad, peso, descripcion, valor, imagen)
             VALUES (?1, ?2, COALESCE(?3, 1), COALESCE(?4, 0), COALESCE(?5, ''), COALESCE(?6, 0), ?7)
             RETURNING id",
        )
        .bind(input.personaje_id)
        .bind(&input.item)
        .bind(input.cantidad)
        .bind(input.peso)
        .bind(&input.descripcion)
        .bind(input.valor)
        .bind(&input.imagen)
        .fetch_one(pool)
        .await
    }

    /// Set the quantity of an inventory row. Returns `true` if a row was updated.
    pub async fn update_quantity(
        pool: &SqlitePool,
        id: DbId,
        cantidad: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE inventario SET cantidad = ?2 WHERE id = ?1")
            .bind(id)
            .bind(cantidad)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an inventory row. Returns `true` if a row was removed.
    ///
    /// Equipment slots on the owner that point at this row are left as-is.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inventario WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
