//! Inventory table rows.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use super::{Badge, Entry, PlaceholderText, TableRow, entries};
use crate::net::types::{InventoryItem, category_class};
use crate::state::dashboard::LoadState;
use crate::util::clock;

pub const HEADERS: [&str; 6] = ["ID", "Item Name", "Category", "Quantity", "Location", "Last Updated"];

pub const TEXT: PlaceholderText = PlaceholderText {
    loading: "Loading inventory data...",
    failed: "Failed to load inventory data",
    empty: "No inventory items found",
};

/// Column holding the category badge.
pub const CATEGORY_COLUMN: usize = 2;

#[must_use]
pub fn row(item: &InventoryItem) -> TableRow {
    let label = item.category_label().to_owned();
    TableRow {
        key: item.item_id,
        cells: vec![
            item.item_id.to_string(),
            item.item_name.clone(),
            label.clone(),
            item.quantity.to_string(),
            item.location.clone(),
            clock::display_date(item.last_updated.as_deref()),
        ],
        badge_column: CATEGORY_COLUMN,
        badge: Badge {
            class: format!("category-badge {}", category_class(item.category.as_ref().map(|c| c.category_name.as_str()))),
            label,
        },
    }
}

#[must_use]
pub fn rows(load: &LoadState<InventoryItem>) -> Vec<Entry<TableRow>> {
    entries(load, &TEXT, row)
}
