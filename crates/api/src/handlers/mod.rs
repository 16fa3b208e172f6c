pub mod armor_template;
pub mod character;
pub mod inventory;
pub mod item_template;
pub mod skill;
pub mod skill_template;
pub mod weapon_template;
