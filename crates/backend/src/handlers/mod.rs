pub mod a001_character;
pub mod health;
