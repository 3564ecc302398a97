//! Shipment table rows.

#[cfg(test)]
#[path = "shipments_test.rs"]
mod shipments_test;

use super::{Badge, Entry, PlaceholderText, TableRow, entries};
use crate::net::types::Shipment;
use crate::state::dashboard::LoadState;
use crate::util::clock;

pub const HEADERS: [&str; 6] = ["Shipment ID", "Item ID", "Origin", "Destination", "Status", "Expected Delivery"];

pub const TEXT: PlaceholderText = PlaceholderText {
    loading: "Loading shipment data...",
    failed: "Failed to load shipment data",
    empty: "No shipments found",
};

pub const STATUS_COLUMN: usize = 4;

#[must_use]
pub fn row(shipment: &Shipment) -> TableRow {
    let label = shipment.status.label().to_owned();
    TableRow {
        key: shipment.shipment_id,
        cells: vec![
            shipment.shipment_id.to_string(),
            shipment.item_id.map_or_else(|| "N/A".to_owned(), |id| id.to_string()),
            shipment.origin.clone(),
            shipment.destination.clone(),
            label.clone(),
            clock::display_date(shipment.expected_delivery_date.as_deref()),
        ],
        badge_column: STATUS_COLUMN,
        badge: Badge { class: format!("status-badge {}", shipment.status.css_class()), label },
    }
}

#[must_use]
pub fn rows(load: &LoadState<Shipment>) -> Vec<Entry<TableRow>> {
    entries(load, &TEXT, row)
}
