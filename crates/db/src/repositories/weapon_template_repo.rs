//! Repository for the `armas_predefinidas` catalog.

use pathfinder_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::weapon_template::{CreateWeaponTemplate, WeaponTemplate};

const COLUMNS: &str = "id, nombre, tipo, dano, critico_rango, critico_multiplicador, \
     tipo_dano, alcance, peso, valor, descripcion, imagen";

/// Provides CRUD operations for the weapon library.
pub struct WeaponTemplateRepo;

impl WeaponTemplateRepo {
    /// List the whole catalog ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<WeaponTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM armas_predefinidas ORDER BY nombre");
        sqlx::query_as::<_, WeaponTemplate>(&query).fetch_all(pool).await
    }

    /// Insert a new template, returning its ID.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateWeaponTemplate,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO armas_predefinidas
                (nombre, tipo, dano, critico_rango, critico_multiplicador, tipo_dano,
                 alcance, peso, valor, descripcion, imagen)
             VALUES (?1, COALESCE(?2, 'Cuerpo a cuerpo'), COALESCE(?3, '1d6'),
                     COALESCE(?4, '20'), COALESCE(?5, 2), COALESCE(?6, 'Contundente'),
                     COALESCE(?7, 0), COALESCE(?8, 0), COALESCE(?9, 0), COALESCE(?10, ''), ?11)
             RETURNING id",
        )
        .bind(&input.nombre)
        .bind(&input.tipo)
        .bind(&input.dano)
        .bind(&input.critico_rango)
        .bind(input.critico_multiplicador)
        .bind(&input.tipo_dano)
        .bind(input.alcance)
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
        input: &CreateWeaponTemplate,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE armas_predefinidas SET
                nombre = ?2, tipo = COALESCE(?3, 'Cuerpo a cuerpo'), dano = COALESCE(?4, '1d6'),
                critico_rango = COALESCE(?5, '20'), critico_multiplicador = COALESCE(?6, 2),
                tipo_dano = COALESCE(?7, 'Contundente'), alcance = COALESCE(?8, 0),
                peso = COALESCE(?9, 0), valor = COALESCE(?10, 0),
                descripcion = COALESCE(?11, ''), imagen = ?12
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&input.nombre)
        .bind(&input.tipo)
        .bind(&input.dano)
        .bind(&input.critico_rango)
        .bind(input.critico_multiplicador)
        .bind(&input.tipo_dano)
        .bind(input.alcance)
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
        let result = sqlx::query("DELETE FROM armas_predefinidas WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
