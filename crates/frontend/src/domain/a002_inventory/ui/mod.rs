pub mod controller;
pub mod dom;
pub mod state;

pub use controller::{InventoryController, InventorySurface};
pub use dom::DomInventory;
