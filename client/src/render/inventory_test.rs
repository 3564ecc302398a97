use super::*;
use crate::net::types::Category;
use crate::render::RowKind;

fn widget(category: Option<Category>) -> InventoryItem {
    InventoryItem {
        item_id: 7,
        item_name: "Widget".into(),
        category,
        quantity: 10,
        location: "A-1".into(),
        last_updated: Some("2024-03-05T10:00:00Z".into()),
    }
}

#[test]
fn uncategorized_item_row() {
    let row = row(&widget(None));
    assert_eq!(row.key, 7);
    assert_eq!(row.cells, vec!["7", "Widget", "Uncategorized", "10", "A-1", "3/5/2024"]);
    assert_eq!(row.badge.label, "Uncategorized");
    assert_eq!(row.badge.class, "category-badge uncategorized");
}

#[test]
fn category_badge_is_hyphenated() {
    let cat = Category { category_id: 1, category_name: "Raw Materials".into(), description: None };
    let row = row(&widget(Some(cat)));
    assert_eq!(row.cells[CATEGORY_COLUMN], "Raw Materials");
    assert_eq!(row.badge.class, "category-badge raw-materials");
}

#[test]
fn empty_inventory_renders_single_placeholder() {
    let rows = rows(&LoadState::Loaded(vec![]));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind(), RowKind::NoData);
    assert!(matches!(&rows[0], Entry::Placeholder(p) if p.message == "No inventory items found"));
}

#[test]
fn missing_timestamp_shows_na() {
    let mut item = widget(None);
    item.last_updated = None;
    assert_eq!(row(&item).cells[5], "N/A");
}
