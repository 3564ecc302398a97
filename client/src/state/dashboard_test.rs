use super::*;
use crate::net::types::ShipmentStatus;
use crate::state::modal::{DeleteTarget, FormMode, ModalKind};

fn shipment(id: i64, status: ShipmentStatus) -> Shipment {
    Shipment {
        shipment_id: id,
        item_id: Some(1),
        origin: "A".into(),
        destination: "B".into(),
        status,
        expected_delivery_date: None,
    }
}

// =============================================================
// PanelState
// =============================================================

#[test]
fn begin_marks_loading_and_issues_new_tokens() {
    let mut panel: PanelState<Shipment> = PanelState::default();
    let a = panel.begin();
    let b = panel.begin();
    assert!(b > a);
    assert_eq!(panel.load, LoadState::Loading);
}

#[test]
fn stale_completion_is_discarded() {
    let mut panel: PanelState<Shipment> = PanelState::default();
    let first = panel.begin();
    let second = panel.begin();
    assert!(panel.complete(second, Ok(vec![shipment(2, ShipmentStatus::Pending)])));
    assert!(!panel.complete(first, Ok(vec![shipment(1, ShipmentStatus::Pending)])));
    assert_eq!(panel.items().len(), 1);
    assert_eq!(panel.items()[0].shipment_id, 2);
}

#[test]
fn failed_completion_keeps_message() {
    let mut panel: PanelState<Shipment> = PanelState::default();
    let token = panel.begin();
    panel.complete(token, Err(ApiError::Http { status: 500 }));
    assert_eq!(panel.load, LoadState::Failed("HTTP error! status: 500".into()));
    assert!(panel.items().is_empty());
}

#[test]
fn retain_removes_rows_locally() {
    let mut panel = PanelState::default();
    let token = panel.begin();
    panel.complete(token, Ok(vec![shipment(1, ShipmentStatus::Pending), shipment(2, ShipmentStatus::Delivered)]));
    panel.retain(|s| s.shipment_id != 1);
    assert_eq!(panel.items().len(), 1);
}

// =============================================================
// DashboardSummary
// =============================================================

#[test]
fn summary_ignores_superseded_refresh() {
    let mut summary = DashboardSummary::default();
    let old = summary.begin();
    let new = summary.begin();
    assert!(!summary.set_shipments(old, Ok(vec![shipment(1, ShipmentStatus::Pending)])));
    assert!(summary.set_shipments(new, Ok(vec![])));
    assert!(summary.shipments.items().is_empty());
}

#[test]
fn summary_snapshots_fail_independently() {
    let mut summary = DashboardSummary::default();
    let token = summary.begin();
    summary.set_inventory(token, Err(ApiError::Network("down".into())));
    summary.set_shipments(token, Ok(vec![shipment(1, ShipmentStatus::InTransit)]));
    assert!(summary.inventory.is_failed());
    assert!(summary.shipments.is_loaded());
}

#[test]
fn removed_shipment_leaves_summary_snapshot() {
    let mut summary = DashboardSummary::default();
    let token = summary.begin();
    summary.set_shipments(token, Ok(vec![shipment(1, ShipmentStatus::Pending), shipment(2, ShipmentStatus::Pending)]));
    summary.note_shipment_removed(1);
    assert_eq!(summary.shipments.items().len(), 1);
}

// =============================================================
// DashboardState
// =============================================================

#[test]
fn scroll_lock_follows_modal_and_confirm() {
    let mut state = DashboardState::default();
    assert!(!state.scroll_locked());
    state.modal.open(ModalKind::Space, FormMode::Create);
    assert!(state.scroll_locked());
    state.modal.close();
    state.confirm = Some(ConfirmRequest::new(DeleteTarget::Category { id: 1 }));
    assert!(state.scroll_locked());
}

#[test]
fn item_option_label_names_id() {
    let item = InventoryItem {
        item_id: 7,
        item_name: "Widget".into(),
        category: None,
        quantity: 1,
        location: String::new(),
        last_updated: None,
    };
    assert_eq!(ItemOption::from_item(&item).label, "Widget (ID: 7)");
}
