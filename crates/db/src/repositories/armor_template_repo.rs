//! Repository for the `armaduras_predefinidas` catalog.

use pathfinder_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::armor_template::{ArmorTemplate, CreateArmorTemplate};

const COLUMNS: &str = "id, nombre, tipo, bonificador_ca, max_destreza, penalizador, \
     fallo_conjuro, peso, valor, descripcion, imagen";

/// Provides CRUD operations for the armor library.
pub struct ArmorTemplateRepo;

impl ArmorTemplateRepo {
    /// List the whole catalog ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<ArmorTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM armaduras_predefinidas ORDER BY nombre");
        sqlx::query_as::<_, ArmorTemplate>(&query).fetch_all(pool).await
    }

    /// Insert a new template, returning its ID.
    ///
    /// `max_destreza` has no default: omitting it means no Dexterity cap.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateArmorTemplate,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO armaduras_predefinidas
                (nombre, tipo, bonificador_ca, max_destreza, penalizador, fallo_conjuro,
                 peso, valor, descripcion, imagen)
             VALUES (?1, COALESCE(?2, 'Ligera'), COALESCE(?3, 0), ?4, COALESCE(?5, 0),
                     COALESCE(?6, 0), COALESCE(?7, 0), COALESCE(?8, 0), COALESCE(?9, ''), ?10)
             RETURNING id",
        )
        .bind(&input.nombre)
        .bind(&input.tipo)
        .bind(input.bonificador_ca)
        .bind(input.max_destreza)
        .bind(input.penalizador)
        .bind(input.fallo_conjuro)
        .bind(input.peso)
        .bind(input.valor)
        .bind(&input.descripcion)
        .bind(&input.imagen)
        .fetch_one(pool)
        .await
    }

    /// Overwrite every column of a template. Omitted fields reset to defaults.
    ///
    /// Returns `true` if a row was updated.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        input: &CreateArmorTemplate,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE armaduras_predefinidas SET
                nombre = ?2, tipo = COALESCE(?3, 'Ligera'), bonificador_ca = COALESCE(?4, 0),
                max_destreza = ?5, penalizador = COALESCE(?6, 0),
                fallo_conjuro = COALESCE(?7, 0), peso = COALESCE(?8, 0),
                valor = COALESCE(?9, 0), descripcion = COALESCE(?10, ''), imagen = ?11
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&input.nombre)
        .bind(&input.tipo)
        .bind(input.bonificador_ca)
        .bind(input.max_destreza)
        .bind(input.penalizador)
        .bind(input.fallo_conjuro)
        .bind(input.peso)
        .bind(input.valor)
        .bind(&input.descripcion)
        .bind(&input.imagen)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a template. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM armaduras_predefinidas WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
