pub mod example_data;
pub mod repository;
pub mod service;
pub mod tables;
