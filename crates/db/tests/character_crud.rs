//! Integration tests for character, inventory and skill repositories.
//!
//! Exercises:
//! - Column defaults on create
//! - Partial update overlay
//! - Cascading delete of inventory and skills without foreign-key enforcement
//! - Dependent rows for owner ids that do not exist
//! - Legacy rows with NULL text columns
//! - Quantity-only inventory updates
//! - Equipment slots that outlive the referenced item

use assert_matches::assert_matches;
use pathfinder_db::models::character::{CreateCharacter, UpdateCharacter};
use pathfinder_db::models::inventory::CreateInventoryItem;
use pathfinder_db::models::skill::CreateSkill;
use pathfinder_db::repositories::{CharacterRepo, InventoryRepo, SkillRepo};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Open the test database with the same connection settings as the server,
/// so foreign keys are not enforced and the cascade runs through the repo.
async fn setup(options: SqliteConnectOptions) -> SqlitePool {
    let pool = pathfinder_db::connect_with(options).await.unwrap();
    pathfinder_db::init_schema(&pool).await.unwrap();
    pool
}

fn new_character(nombre: &str) -> CreateCharacter {
    CreateCharacter {
        nombre: nombre.to_string(),
        ..Default::default()
    }
}

fn new_item(personaje_id: i64, item: &str) -> CreateInventoryItem {
    CreateInventoryItem {
        personaje_id,
        item: item.to_string(),
        cantidad: Some(2),
        peso: Some(4.5),
        descripcion: Some("Bien afilada".to_string()),
        valor: Some(15),
        imagen: None,
    }
}

fn new_skill(personaje_id: i64, nombre: &str) -> CreateSkill {
    CreateSkill {
        personaje_id,
        nombre: nombre.to_string(),
        atributo: Some("destreza".to_string()),
        rango: Some(3),
        entrenamiento: None,
    }
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_create_character_applies_defaults(
    _: SqlitePoolOptions,
    options: SqliteConnectOptions,
) {
    let pool = setup(options).await;

    let id = CharacterRepo::create(&pool, &new_character("Seelah"))
        .await
        .unwrap();
    let character = CharacterRepo::find_by_id(&pool, id).await.unwrap().unwrap();

    assert_eq!(character.nombre, "Seelah");
    assert_eq!(character.clase.as_deref(), Some("Guerrero"));
    assert_eq!(character.raza.as_deref(), Some("Humano"));
    assert_eq!(character.nivel, 1);
    assert_eq!((character.hp_actual, character.hp_max), (10, 10));
    assert_eq!(character.oro, 0);
    for score in [
        character.fuerza,
        character.destreza,
        character.constitucion,
        character.inteligencia,
        character.sabiduria,
        character.carisma,
    ] {
        assert_eq!(score, 10);
    }
    assert_eq!(character.notas, "");
    assert_matches!(character.escudo_id, None);
}

#[sqlx::test(migrations = false)]
async fn test_list_characters_in_id_order(_: SqlitePoolOptions, options: SqliteConnectOptions) {
    let pool = setup(options).await;

    let first = CharacterRepo::create(&pool, &new_character("Ezren")).await.unwrap();
    let second = CharacterRepo::create(&pool, &new_character("Amiri")).await.unwrap();

    let ids: Vec<i64> = CharacterRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[sqlx::test(migrations = false)]
async fn test_partial_update_keeps_omitted_fields(
    _: SqlitePoolOptions,
    options: SqliteConnectOptions,
) {
    let pool = setup(options).await;

    let id = CharacterRepo::create(
        &pool,
        &CreateCharacter {
            nombre: "Kyra".to_string(),
            clase: Some("Clérigo".to_string()),
            sabiduria: Some(16),
            notas: Some("Devota de Sarenrae".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let before = CharacterRepo::find_by_id(&pool, id).await.unwrap().unwrap();

    let updated = CharacterRepo::update(
        &pool,
        id,
        &UpdateCharacter {
            hp_actual: Some(4),
            nivel: Some(2),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    let stored = CharacterRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
    assert_eq!(stored.hp_actual, 4);
    assert_eq!(stored.nivel, 2);
    assert_eq!(stored.clase, before.clase);
    assert_eq!(stored.sabiduria, 16);
    assert_eq!(stored.notas, before.notas);
    assert_eq!(stored.hp_max, before.hp_max);
}

#[sqlx::test(migrations = false)]
async fn test_update_missing_character_returns_none(
    _: SqlitePoolOptions,
    options: SqliteConnectOptions,
) {
    let pool = setup(options).await;

    let result = CharacterRepo::update(&pool, 424242, &UpdateCharacter::default())
        .await
        .unwrap();
    assert_matches!(result, None);
}

#[sqlx::test(migrations = false)]
async fn test_delete_character_cascades(_: SqlitePoolOptions, options: SqliteConnectOptions) {
    let pool = setup(options).await;

    let id = CharacterRepo::create(&pool, &new_character("Merisiel")).await.unwrap();
    let other = CharacterRepo::create(&pool, &new_character("Harsk")).await.unwrap();
    InventoryRepo::create(&pool, &new_item(id, "Daga")).await.unwrap();
    InventoryRepo::create(&pool, &new_item(id, "Cuerda")).await.unwrap();
    SkillRepo::create(&pool, &new_skill(id, "Sigilo")).await.unwrap();
    InventoryRepo::create(&pool, &new_item(other, "Ballesta")).await.unwrap();

    assert!(CharacterRepo::delete(&pool, id).await.unwrap());

    assert!(CharacterRepo::find_by_id(&pool, id).await.unwrap().is_none());
    assert!(InventoryRepo::list_by_character(&pool, id).await.unwrap().is_empty());
    assert!(SkillRepo::list_by_character(&pool, id).await.unwrap().is_empty());

    // Other characters are untouched.
    assert_eq!(InventoryRepo::list_by_character(&pool, other).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = false)]
async fn test_connection_does_not_enforce_foreign_keys(
    _: SqlitePoolOptions,
    options: SqliteConnectOptions,
) {
    let pool = setup(options).await;

    let enforced: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(enforced, 0);
}

#[sqlx::test(migrations = false)]
async fn test_dependent_rows_accept_unknown_owner(
    _: SqlitePoolOptions,
    options: SqliteConnectOptions,
) {
    let pool = setup(options).await;

    let item = InventoryRepo::create(&pool, &new_item(777, "Antorcha")).await.unwrap();
    let skill = SkillRepo::create(&pool, &new_skill(777, "Trepar")).await.unwrap();

    let items = InventoryRepo::list_by_character(&pool, 777).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, item);
    let skills = SkillRepo::list_by_character(&pool, 777).await.unwrap();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].id, skill);
}

#[sqlx::test(migrations = false)]
async fn test_legacy_null_class_and_race_stay_null(
    _: SqlitePoolOptions,
    options: SqliteConnectOptions,
) {
    let pool = setup(options).await;

    sqlx::query("INSERT INTO personajes (nombre, clase, raza) VALUES ('Antiguo', NULL, NULL)")
        .execute(&pool)
        .await
        .unwrap();

    let characters = CharacterRepo::list(&pool).await.unwrap();
    assert_eq!(characters.len(), 1);
    assert_matches!(characters[0].clase, None);
    assert_matches!(characters[0].raza, None);
}

#[sqlx::test(migrations = false)]
async fn test_delete_missing_character_returns_false(
    _: SqlitePoolOptions,
    options: SqliteConnectOptions,
) {
    let pool = setup(options).await;
    assert!(!CharacterRepo::delete(&pool, 99).await.unwrap());
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_inventory_defaults(_: SqlitePoolOptions, options: SqliteConnectOptions) {
    let pool = setup(options).await;

    let owner = CharacterRepo::create(&pool, &new_character("Lem")).await.unwrap();
    let id = InventoryRepo::create(
        &pool,
        &CreateInventoryItem {
            personaje_id: owner,
            item: "Laúd".to_string(),
            cantidad: None,
            peso: None,
            descripcion: None,
            valor: None,
            imagen: None,
        },
    )
    .await
    .unwrap();

    let item = InventoryRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(item.cantidad, 1);
    assert_eq!(item.peso, 0.0);
    assert_eq!(item.valor, 0);
    assert_eq!(item.descripcion.as_deref(), Some(""));
    assert_matches!(item.imagen, None);
}

#[sqlx::test(migrations = false)]
async fn test_update_quantity_changes_only_quantity(
    _: SqlitePoolOptions,
    options: SqliteConnectOptions,
) {
    let pool = setup(options).await;

    let owner = CharacterRepo::create(&pool, &new_character("Valeros")).await.unwrap();
    let id = InventoryRepo::create(&pool, &new_item(owner, "Espada larga"))
        .await
        .unwrap();
    let before = InventoryRepo::find_by_id(&pool, id).await.unwrap().unwrap();

    assert!(InventoryRepo::update_quantity(&pool, id, 7).await.unwrap());

    let after = InventoryRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(after.cantidad, 7);
    assert_eq!(after.item, before.item);
    assert_eq!(after.peso, before.peso);
    assert_eq!(after.valor, before.valor);
    assert_eq!(after.descripcion, before.descripcion);
}

#[sqlx::test(migrations = false)]
async fn test_update_quantity_missing_row_returns_false(
    _: SqlitePoolOptions,
    options: SqliteConnectOptions,
) {
    let pool = setup(options).await;
    assert!(!InventoryRepo::update_quantity(&pool, 5, 1).await.unwrap());
}

#[sqlx::test(migrations = false)]
async fn test_equipment_slot_may_dangle(_: SqlitePoolOptions, options: SqliteConnectOptions) {
    let pool = setup(options).await;

    let owner = CharacterRepo::create(&pool, &new_character("Kyra")).await.unwrap();
    let shield = InventoryRepo::create(&pool, &new_item(owner, "Escudo pesado"))
        .await
        .unwrap();
    CharacterRepo::update(
        &pool,
        owner,
        &UpdateCharacter {
            escudo_id: Some(Some(shield)),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(InventoryRepo::delete(&pool, shield).await.unwrap());

    let character = CharacterRepo::find_by_id(&pool, owner).await.unwrap().unwrap();
    assert_eq!(character.escudo_id, Some(shield));
    assert!(InventoryRepo::find_by_id(&pool, shield).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_skill_create_list_delete(_: SqlitePoolOptions, options: SqliteConnectOptions) {
    let pool = setup(options).await;

    let owner = CharacterRepo::create(&pool, &new_character("Sajan")).await.unwrap();
    let id = SkillRepo::create(&pool, &new_skill(owner, "Acrobacias")).await.unwrap();

    let skills = SkillRepo::list_by_character(&pool, owner).await.unwrap();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].nombre, "Acrobacias");
    assert_eq!(skills[0].atributo, "destreza");
    assert_eq!(skills[0].rango, 3);
    assert_eq!(skills[0].entrenamiento, "Básico");

    assert!(SkillRepo::delete(&pool, id).await.unwrap());
    assert!(!SkillRepo::delete(&pool, id).await.unwrap());
    assert!(SkillRepo::list_by_character(&pool, owner).await.unwrap().is_empty());
}
