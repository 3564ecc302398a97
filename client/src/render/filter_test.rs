use super::*;
use crate::net::types::{InventoryItem, ShipmentStatus};
use crate::render::{Placeholder, RowKind};

fn item(id: i64, name: &str, category: Option<&str>, qty: u32, location: &str) -> TableRow {
    inventory::row(&InventoryItem {
        item_id: id,
        item_name: name.into(),
        category: category.map(|n| Category { category_id: 1, category_name: n.into(), description: None }),
        quantity: qty,
        location: location.into(),
        last_updated: None,
    })
}

fn shipment(id: i64, origin: &str, status: ShipmentStatus) -> TableRow {
    shipments::row(&Shipment {
        shipment_id: id,
        item_id: Some(5),
        origin: origin.into(),
        destination: "Store".into(),
        status,
        expected_delivery_date: None,
    })
}

// =============================================================
// Matching
// =============================================================

#[test]
fn empty_search_and_filter_match_everything() {
    assert!(row_matches(&item(1, "Widget", None, 3, "A-1"), INVENTORY_FILTER, "", ""));
}

#[test]
fn search_is_case_insensitive_over_tracked_cells() {
    let row = item(1, "Blue Widget", None, 3, "Aisle 4");
    assert!(row_matches(&row, INVENTORY_FILTER, "WIDGET", ""));
    assert!(row_matches(&row, INVENTORY_FILTER, "aisle", ""));
    assert!(!row_matches(&row, INVENTORY_FILTER, "gadget", ""));
}

#[test]
fn inventory_search_ignores_category_cell() {
    let row = item(1, "Widget", Some("Tools"), 3, "A-1");
    assert!(!row_matches(&row, INVENTORY_FILTER, "tools", ""));
    assert!(row_matches(&row, INVENTORY_FILTER, "", "Tools"));
}

#[test]
fn search_and_filter_must_both_pass() {
    let row = shipment(1, "Dock", ShipmentStatus::Pending);
    assert!(row_matches(&row, SHIPMENT_FILTER, "dock", "pending"));
    assert!(!row_matches(&row, SHIPMENT_FILTER, "dock", "delivered"));
    assert!(!row_matches(&row, SHIPMENT_FILTER, "port", "pending"));
}

#[test]
fn status_filter_uses_status_cell_only() {
    let row = shipment(1, "Pending Yard", ShipmentStatus::Delivered);
    assert!(!row_matches(&row, SHIPMENT_FILTER, "", "pending"));
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn placeholders_always_visible() {
    let entries: Vec<Entry<TableRow>> =
        vec![Entry::Placeholder(Placeholder { kind: RowKind::NoData, message: "No shipments found".into() })];
    assert_eq!(visibility(&entries, SHIPMENT_FILTER, "zzz", "delivered"), vec![true]);
}

#[test]
fn visibility_is_idempotent() {
    let entries = vec![
        Entry::Item(shipment(1, "Dock", ShipmentStatus::Pending)),
        Entry::Item(shipment(2, "Port", ShipmentStatus::Delivered)),
    ];
    let first = visibility(&entries, SHIPMENT_FILTER, "", "delivered");
    let second = visibility(&entries, SHIPMENT_FILTER, "", "delivered");
    assert_eq!(first, vec![false, true]);
    assert_eq!(first, second);
}

// =============================================================
// Dropdown options
// =============================================================

#[test]
fn category_options_are_distinct_and_sorted() {
    let cats = vec![
        Category { category_id: 1, category_name: "Tools".into(), description: None },
        Category { category_id: 2, category_name: "Electronics".into(), description: None },
        Category { category_id: 3, category_name: "Tools".into(), description: None },
    ];
    assert_eq!(category_options(&cats), vec!["Electronics", "Tools"]);
}

#[test]
fn status_options_come_from_data() {
    let list = vec![
        Shipment {
            shipment_id: 1,
            item_id: None,
            origin: String::new(),
            destination: String::new(),
            status: ShipmentStatus::InTransit,
            expected_delivery_date: None,
        },
        Shipment {
            shipment_id: 2,
            item_id: None,
            origin: String::new(),
            destination: String::new(),
            status: ShipmentStatus::InTransit,
            expected_delivery_date: None,
        },
    ];
    assert_eq!(status_options(&list), vec!["In Transit"]);
}
