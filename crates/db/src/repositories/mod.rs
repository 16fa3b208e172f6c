//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod armor_template_repo;
pub mod character_repo;
pub mod inventory_repo;
pub mod item_template_repo;
pub mod skill_repo;
pub mod skill_template_repo;
pub mod weapon_template_repo;

pub use armor_template_repo::ArmorTemplateRepo;
pub use character_repo::CharacterRepo;
pub use inventory_repo::InventoryRepo;
pub use item_template_repo::ItemTemplateRepo;
pub use skill_repo::SkillRepo;
pub use skill_template_repo::SkillTemplateRepo;
pub use weapon_template_repo::WeaponTemplateRepo;
