pub mod a001_character;
