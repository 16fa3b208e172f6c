//! Idempotent schema bootstrap.
//!
//! Tables are created with `CREATE TABLE IF NOT EXISTS` on every start.
//! Columns that were added after the first release are appended to older
//! database files with `ALTER TABLE ... ADD COLUMN`; the statement fails
//! harmlessly when the column is already present.

use crate::DbPool;

const TABLES: &[(&str, &str)] = &[
    (
        "personajes",
        "CREATE TABLE IF NOT EXISTS personajes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            clase TEXT DEFAULT 'Guerrero',
            raza TEXT DEFAULT 'Humano',
            nivel INTEGER DEFAULT 1,
            hp_max INTEGER DEFAULT 10,
            hp_actual INTEGER DEFAULT 10,
            oro INTEGER DEFAULT 0,
            fuerza INTEGER DEFAULT 10,
            destreza INTEGER DEFAULT 10,
            constitucion INTEGER DEFAULT 10,
            inteligencia INTEGER DEFAULT 10,
            sabiduria INTEGER DEFAULT 10,
            carisma INTEGER DEFAULT 10,
            notas TEXT DEFAULT '',
            escudo_id INTEGER,
            armadura_id INTEGER,
            mano_derecha_id INTEGER,
            mano_izquierda_id INTEGER
        )",
    ),
    (
        "inventario",
        "CREATE TABLE IF NOT EXISTS inventario (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            personaje_id INTEGER,
            item TEXT NOT NULL,
            cantidad INTEGER DEFAULT 1,
            peso REAL DEFAULT 0,
            descripcion TEXT,
            valor INTEGER DEFAULT 0,
            imagen TEXT,
            FOREIGN KEY (personaje_id) REFERENCES personajes(id) ON DELETE CASCADE
        )",
    ),
    (
        "habilidades",
        "CREATE TABLE IF NOT EXISTS habilidades (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            personaje_id INTEGER,
            nombre TEXT NOT NULL,
            atributo TEXT DEFAULT 'inteligencia',
            rango INTEGER DEFAULT 1,
            entrenamiento TEXT DEFAULT 'Básico',
            FOREIGN KEY (personaje_id) REFERENCES personajes(id) ON DELETE CASCADE
        )",
    ),
    (
        "objetos_predefinidos",
        "CREATE TABLE IF NOT EXISTS objetos_predefinidos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            tipo TEXT DEFAULT 'Misc',
            peso REAL DEFAULT 0,
            valor INTEGER DEFAULT 0,
            descripcion TEXT,
            imagen TEXT
        )",
    ),
    (
        "habilidades_predefinidas",
        "CREATE TABLE IF NOT EXISTS habilidades_predefinidas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            clase TEXT,
            nivel_minimo INTEGER DEFAULT 1,
            entrenamiento TEXT DEFAULT 'Básico',
            atributo TEXT DEFAULT 'inteligencia'
        )",
    ),
    (
        "armaduras_predefinidas",
        "CREATE TABLE IF NOT EXISTS armaduras_predefinidas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            tipo TEXT DEFAULT 'Ligera',
            bonificador_ca INTEGER DEFAULT 0,
            max_destreza INTEGER,
            penalizador INTEGER DEFAULT 0,
            fallo_conjuro INTEGER DEFAULT 0,
            peso REAL DEFAULT 0,
            valor INTEGER DEFAULT 0,
            descripcion TEXT,
            imagen TEXT
        )",
    ),
    (
        "armas_predefinidas",
        "CREATE TABLE IF NOT EXISTS armas_predefinidas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            tipo TEXT DEFAULT 'Cuerpo a cuerpo',
            dano TEXT DEFAULT '1d6',
            critico_rango TEXT DEFAULT '20',
            critico_multiplicador INTEGER DEFAULT 2,
            tipo_dano TEXT DEFAULT 'Contundente',
            alcance INTEGER DEFAULT 0,
            peso REAL DEFAULT 0,
            valor INTEGER DEFAULT 0,
            descripcion TEXT,
            imagen TEXT
        )",
    ),
];

/// Columns added after the initial schema, applied best-effort to old files.
const ADDED_COLUMNS: &[(&str, &str)] = &[
    ("inventario", "ALTER TABLE inventario ADD COLUMN imagen TEXT"),
    (
        "objetos_predefinidos",
        "ALTER TABLE objetos_predefinidos ADD COLUMN imagen TEXT",
    ),
];

/// Create every table if missing, then append late-added columns.
///
/// Safe to call on every start and on an already-initialized database.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for &(table, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table, "Table ready");
    }

    for &(table, ddl) in ADDED_COLUMNS {
        if let Err(e) = sqlx::query(ddl).execute(pool).await {
            tracing::debug!(table, error = %e, "Column already present, skipping");
        }
    }

    tracing::info!(tables = TABLES.len(), "Database schema initialized");
    Ok(())
}
