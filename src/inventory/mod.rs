pub mod manager;

pub use manager::{default_inventory_path, InventoryError, InventoryManager};
