//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct whose fields are the table columns
//! - A `Deserialize` create DTO; optional fields fall back to column defaults
//! - Update DTOs where the resource supports more than full replacement

pub mod armor_template;
pub mod character;
pub mod inventory;
pub mod item_template;
pub mod skill;
pub mod skill_template;
pub mod weapon_template;
