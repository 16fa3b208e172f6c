//! Repository for the `personajes` table.

use pathfinder_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::character::{Character, CreateCharacter, UpdateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, clase, raza, nivel, hp_max, hp_actual, oro, \
     fuerza, destreza, constitucion, inteligencia, sabiduria, carisma, notas, \
     escudo_id, armadura_id, mano_derecha_id, mano_izquierda_id";

/// Provides CRUD operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// List every character, oldest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personajes ORDER BY id");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// Find a character by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personajes WHERE id = ?1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new character, returning its ID.
    ///
    /// Every omitted field takes its column default.
    pub async fn create(pool: &SqlitePool, input: &CreateCharacter) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO personajes
                (nombre, clase, raza, nivel, hp_max, hp_actual, oro,
                 fuerza, destreza, constitucion, inteligencia, sabiduria, carisma, notas,
                 escudo_id, armadura_id, mano_derecha_id, mano_izquierda_id)
             VALUES (?1, COALESCE(?2, 'Guerrero'), COALESCE(?3, 'Humano'), COALESCE(?4, 1),
                     COALESCE(?5, 10), COALESCE(?6, 10), COALESCE(?7, 0),
                     COALESCE(?8, 10), COALESCE(?9, 10), COALESCE(?10, 10),
                     COALESCE(?11, 10), COALESCE(?12, 10), COALESCE(?13, 10),
                     COALESCE(?14, ''), ?15, ?16, ?17, ?18)
             RETURNING id",
        )
        .bind(&input.nombre)
        .bind(&input.clase)
        .bind(&input.raza)
        .bind(input.nivel)
        .bind(input.hp_max)
        .bind(input.hp_actual)
        .bind(input.oro)
        .bind(input.fuerza)
        .bind(input.destreza)
        .bind(input.constitucion)
        .bind(input.inteligencia)
        .bind(input.sabiduria)
        .bind(input.carisma)
        .bind(&input.notas)
        .bind(input.escudo_id)
        .bind(input.armadura_id)
        .bind(input.mano_derecha_id)
        .bind(input.mano_izquierda_id)
        .fetch_one(pool)
        .await
    }

    /// Merge `input` into the stored row and write the full row back.
    ///
    /// The read and the write are separate statements with no lock held in
    /// between: concurrent updates to the same character are last-write-wins.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let Some(mut character) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        character.apply(input);

        sqlx::query(
            "UPDATE personajes SET
                nombre = ?2, clase = ?3, raza = ?4, nivel = ?5, hp_max = ?6,
                hp_actual = ?7, oro = ?8, fuerza = ?9, destreza = ?10,
                constitucion = ?11, inteligencia = ?12, sabiduria = ?13,
                carisma = ?14, notas = ?15, escudo_id = ?16, armadura_id = ?17,
                mano_derecha_id = ?18, mano_izquierda_id = ?19
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&character.nombre)
        .bind(&character.clase)
        .bind(&character.raza)
        .bind(character.nivel)
        .bind(character.hp_max)
        .bind(character.hp_actual)
        .bind(character.oro)
        .bind(character.fuerza)
        .bind(character.destreza)
        .bind(character.constitucion)
        .bind(character.inteligencia)
        .bind(character.sabiduria)
        .bind(character.carisma)
        .bind(&character.notas)
        .bind(character.escudo_id)
        .bind(character.armadura_id)
        .bind(character.mano_derecha_id)
        .bind(character.mano_izquierda_id)
        .execute(pool)
        .await?;

        Ok(Some(character))
    }

    /// Delete a character together with its inventory and skills.
    ///
    /// Foreign keys are not enforced on the connection, so the dependent
    /// rows are removed explicitly, all three statements in one transaction.
    /// Returns `true` if the character row itself existed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let items = sqlx::query("DELETE FROM inventario WHERE personaje_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let skills = sqlx::query("DELETE FROM habilidades WHERE personaje_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let result = sqlx::query("DELETE FROM personajes WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(personaje_id = id, items, skills, "Character deleted with dependents");
        Ok(result.rows_affected() > 0)
    }
}
