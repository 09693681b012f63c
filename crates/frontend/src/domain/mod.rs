pub mod a001_character;
pub mod a002_inventory;
