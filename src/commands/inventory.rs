//! Inventory command: summarize the loaded records.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use crate::inventory::{default_inventory_path, InventoryManager};
use crate::output::OutputControls;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct InventorySummary {
    pub path: PathBuf,
    pub records: usize,
    pub string_fields: Vec<String>,
}

pub fn summarize(path: PathBuf, inventory: &InventoryManager) -> InventorySummary {
    InventorySummary {
        path,
        records: inventory.len(),
        string_fields: inventory.string_fields(),
    }
}

/// Show record count and searchable fields.
pub fn show(file: Option<&Path>, output: &OutputControls) -> Result<()> {
    let path = file.map(Path::to_path_buf).unwrap_or_else(default_inventory_path);
    let inventory = InventoryManager::load(&path)
        .with_context(|| format!("Failed to load inventory: {:?}", path))?;

    let summary = summarize(path, &inventory);

    if output.json {
        output.print(&summary);
        return Ok(());
    }

    println!("Inventory: {}", summary.path.display());
    println!("Records: {}", summary.records);
    if summary.string_fields.is_empty() {
        println!("No searchable text fields.");
    } else {
        println!("Searchable fields: {}", summary.string_fields.join(", "));
    }

    Ok(())
}
