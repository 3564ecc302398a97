use super::*;

// =============================================================
// Item
// =============================================================

fn item_draft(name: &str, category: &str, qty: &str) -> ItemDraft {
    ItemDraft { name: name.into(), category_id: category.into(), quantity: qty.into(), location: " A-1 ".into() }
}

#[test]
fn item_payload_coerces_and_trims() {
    let payload = item_draft(" Widget ", "3", "10").to_payload(None).unwrap();
    assert_eq!(payload.item_name, "Widget");
    assert_eq!(payload.category_id, Some(3));
    assert_eq!(payload.quantity, 10);
    assert_eq!(payload.location, "A-1");
    assert_eq!(payload.item_id, None);
}

#[test]
fn item_without_category_sends_null() {
    let payload = item_draft("Widget", "", "1").to_payload(Some(5)).unwrap();
    assert_eq!(payload.category_id, None);
    assert_eq!(payload.item_id, Some(5));
}

#[test]
fn item_rejects_blank_name_and_negative_quantity() {
    assert_eq!(
        item_draft("  ", "", "1").to_payload(None),
        Err(ApiError::Validation("Item name is required".into()))
    );
    assert!(item_draft("Widget", "", "-3").to_payload(None).is_err());
    assert!(item_draft("Widget", "", "2.5").to_payload(None).is_err());
    assert!(item_draft("Widget", "", "").to_payload(None).is_err());
}

// =============================================================
// Shipment
// =============================================================

#[test]
fn shipment_requires_item_id() {
    let draft = ShipmentDraft::default();
    assert_eq!(draft.to_payload("now"), Err(ApiError::Validation("Item ID is required".into())));
    let draft = ShipmentDraft { item_id: "abc".into(), ..ShipmentDraft::default() };
    assert_eq!(draft.to_payload("now").unwrap_err().error_code(), "E_VALIDATION");
}

#[test]
fn shipment_blank_date_defaults_to_now() {
    let draft = ShipmentDraft { item_id: "7".into(), status: "In Transit".into(), ..ShipmentDraft::default() };
    let payload = draft.to_payload("2024-03-05T10:00:00Z").unwrap();
    assert_eq!(payload.item_id, 7);
    assert_eq!(payload.status, ShipmentStatus::InTransit);
    assert_eq!(payload.expected_delivery_date, "2024-03-05T10:00:00Z");
}

#[test]
fn shipment_draft_round_trips_from_row() {
    let shipment = Shipment {
        shipment_id: 2,
        item_id: Some(7),
        origin: "Dock 1".into(),
        destination: "Store".into(),
        status: ShipmentStatus::Delivered,
        expected_delivery_date: Some("2024-03-05T10:00:00Z".into()),
    };
    let draft = ShipmentDraft::from_shipment(&shipment);
    assert_eq!(draft.status, "Delivered");
    assert_eq!(draft.expected_delivery_date, "2024-03-05");
    assert_eq!(draft.to_payload("x").unwrap().item_id, 7);
}

// =============================================================
// Space
// =============================================================

#[test]
fn space_available_recomputes_leniently() {
    let mut draft = SpaceDraft { zone: "A".into(), total_capacity: "100".into(), used_capacity: "40".into() };
    assert_eq!(draft.available(), 60);
    draft.used_capacity = "150".into();
    assert_eq!(draft.available(), 0);
    draft.total_capacity = "lots".into();
    assert_eq!(draft.available(), 0);
}

#[test]
fn space_requires_zone() {
    let draft = SpaceDraft { zone: String::new(), total_capacity: "100".into(), used_capacity: "40".into() };
    assert_eq!(draft.to_payload(), Err(ApiError::Validation("Please select a zone".into())));
}

#[test]
fn space_payload_carries_available() {
    let draft = SpaceDraft { zone: "B".into(), total_capacity: "100".into(), used_capacity: "40".into() };
    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.available_capacity, 60);
}

// =============================================================
// Maintenance / Category
// =============================================================

#[test]
fn maintenance_requires_numeric_equipment_and_date() {
    let mut draft = MaintenanceDraft { equipment_id: "x".into(), scheduled_date: "2024-03-05".into(), ..MaintenanceDraft::default() };
    assert!(draft.to_payload(None).is_err());
    draft.equipment_id = "4".into();
    draft.scheduled_date = String::new();
    assert_eq!(draft.to_payload(None), Err(ApiError::Validation("Scheduled date is required".into())));
    draft.scheduled_date = "2024-03-05".into();
    let payload = draft.to_payload(Some(9)).unwrap();
    assert_eq!(payload.schedule_id, Some(9));
    assert_eq!(payload.completion_status, MaintenanceStatus::Pending);
}

#[test]
fn category_requires_name() {
    assert!(CategoryDraft::default().to_payload().is_err());
    let payload = CategoryDraft { name: " Tools ".into(), description: String::new() }.to_payload().unwrap();
    assert_eq!(payload.category_name, "Tools");
}

#[test]
fn reset_clears_one_draft() {
    let mut drafts = FormDrafts::default();
    drafts.item.name = "Widget".into();
    drafts.space.zone = "A".into();
    drafts.reset(ModalKind::Item);
    assert_eq!(drafts.item, ItemDraft::default());
    assert_eq!(drafts.space.zone, "A");
}
