//! SQLite persistence for the Pathfinder character sheet server.
//!
//! Exposes pool creation, the idempotent schema bootstrap, row models with
//! their create/update DTOs, and one repository per table.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod schema;

pub use schema::init_schema;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL such as `sqlite://pathfinder.db`.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    connect_with(SqliteConnectOptions::from_str(database_url)?).await
}

/// Open a pool on `options` with the server's connection settings applied.
///
/// The database file is created when missing. Foreign-key enforcement is
/// switched off: owner ids on inventory and skill rows are not checked, and
/// character deletion cascades through [`repositories::CharacterRepo::delete`].
pub async fn connect_with(options: SqliteConnectOptions) -> Result<DbPool, sqlx::Error> {
    let options = options.create_if_missing(true).foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Run a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
