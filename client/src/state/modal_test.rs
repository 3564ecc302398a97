use super::*;

#[test]
fn default_is_closed() {
    let modal = ModalState::default();
    assert!(!modal.is_open());
    assert_eq!(modal.kind(), None);
    assert_eq!(modal.editing_id(), None);
}

#[test]
fn open_then_close_clears_editing_id() {
    let mut modal = ModalState::default();
    modal.open(ModalKind::Item, FormMode::Edit(7));
    assert_eq!(modal.kind(), Some(ModalKind::Item));
    assert_eq!(modal.editing_id(), Some(7));
    modal.close();
    assert_eq!(modal, ModalState::Closed);
    assert_eq!(modal.editing_id(), None);
}

#[test]
fn titles_follow_kind_and_mode() {
    assert_eq!(modal_title(ModalKind::Item, FormMode::Create), "Add New Item");
    assert_eq!(modal_title(ModalKind::Item, FormMode::Edit(1)), "Edit Item");
    assert_eq!(modal_title(ModalKind::Shipment, FormMode::Create), "New Shipment");
    assert_eq!(modal_title(ModalKind::Maintenance, FormMode::Edit(2)), "Edit Maintenance");
    assert_eq!(modal_title(ModalKind::Space, FormMode::Create), "Allocate Space");
    assert_eq!(modal_title(ModalKind::Category, FormMode::Edit(3)), "Manage Categories");
}

#[test]
fn set_mode_only_applies_when_open() {
    let mut modal = ModalState::default();
    modal.set_mode(FormMode::Edit(1));
    assert_eq!(modal, ModalState::Closed);
    modal.open(ModalKind::Category, FormMode::Create);
    modal.set_mode(FormMode::Edit(4));
    assert_eq!(modal.editing_id(), Some(4));
    assert_eq!(modal.kind(), Some(ModalKind::Category));
}

#[test]
fn confirm_prompts_name_the_target() {
    let req = ConfirmRequest::new(DeleteTarget::Inventory { id: 1, name: "Widget".into() });
    assert_eq!(req.message, "Are you sure you want to delete \"Widget\"?");
    assert_eq!(
        DeleteTarget::Shipment { id: 9 }.prompt(),
        "Are you sure you want to delete shipment \"9\"?"
    );
    assert_eq!(DeleteTarget::Space { id: 2 }.success_message(), "Space freed successfully");
}
