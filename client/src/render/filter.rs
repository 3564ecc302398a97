//! Search/filter over rendered table rows.
//!
//! DESIGN
//! ======
//! Filtering works on the same cell text the table shows, so what matches is
//! exactly what the user can read. Placeholder rows are never hidden. The
//! evaluation is pure: re-running it with the same inputs gives the same
//! visibility, which lets the components recompute on every keystroke.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::collections::BTreeSet;

use super::{Entry, TableRow, inventory, shipments};
use crate::net::types::{Category, Shipment};

/// Which cells a table searches and which one the dropdown filters on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterSpec {
    pub search_columns: &'static [usize],
    pub filter_column: usize,
}

/// Inventory: id, name, quantity, location; filtered by category.
pub const INVENTORY_FILTER: FilterSpec =
    FilterSpec { search_columns: &[0, 1, 3, 4], filter_column: inventory::CATEGORY_COLUMN };

/// Shipments: id, item id, origin, destination; filtered by status.
pub const SHIPMENT_FILTER: FilterSpec =
    FilterSpec { search_columns: &[0, 1, 2, 3], filter_column: shipments::STATUS_COLUMN };

fn cell(row: &TableRow, index: usize) -> String {
    row.cells.get(index).map(|c| c.to_lowercase()).unwrap_or_default()
}

/// Whether a data row passes the current search term and filter value.
#[must_use]
pub fn row_matches(row: &TableRow, spec: FilterSpec, search: &str, filter: &str) -> bool {
    let search = search.trim().to_lowercase();
    let filter = filter.trim().to_lowercase();
    let search_ok = search.is_empty() || spec.search_columns.iter().any(|&i| cell(row, i).contains(&search));
    let filter_ok = filter.is_empty() || cell(row, spec.filter_column).contains(&filter);
    search_ok && filter_ok
}

/// Visibility flag per entry; placeholders are always visible.
#[must_use]
pub fn visibility(entries: &[Entry<TableRow>], spec: FilterSpec, search: &str, filter: &str) -> Vec<bool> {
    entries
        .iter()
        .map(|entry| match entry {
            Entry::Item(row) => row_matches(row, spec, search, filter),
            Entry::Placeholder(_) => true,
        })
        .collect()
}

/// Distinct category names, sorted, for the category dropdown.
#[must_use]
pub fn category_options(categories: &[Category]) -> Vec<String> {
    categories
        .iter()
        .map(|c| c.category_name.trim().to_owned())
        .filter(|n| !n.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct status labels present in the shipment list, sorted.
#[must_use]
pub fn status_options(shipments: &[Shipment]) -> Vec<String> {
    shipments
        .iter()
        .map(|s| s.status.label().to_owned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
