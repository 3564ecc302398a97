use super::*;

// =============================================================
// Notifications
// =============================================================

#[test]
fn toast_ids_increase_monotonically() {
    let mut n = Notifications::default();
    let a = n.success("Item added successfully");
    let b = n.error("HTTP error! status: 500");
    n.dismiss(a);
    let c = n.push(ToastKind::Info, "hello");
    assert!(a < b && b < c);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut n = Notifications::default();
    let a = n.success("one");
    let b = n.warning("two");
    n.dismiss(a);
    assert_eq!(n.toasts.len(), 1);
    assert_eq!(n.toasts[0].id, b);
    n.dismiss(999);
    assert_eq!(n.toasts.len(), 1);
}

#[test]
fn toast_kinds_map_to_icons() {
    assert_eq!(ToastKind::Success.icon(), "check-circle");
    assert_eq!(ToastKind::Error.icon(), "exclamation-circle");
    assert_eq!(ToastKind::Warning.icon(), "exclamation-triangle");
    assert_eq!(ToastKind::Info.icon(), "info-circle");
    assert_eq!(ToastKind::Warning.class(), "warning");
}

#[test]
fn latest_is_most_recent() {
    let mut n = Notifications::default();
    n.success("first");
    n.error("second");
    assert_eq!(n.latest().map(|t| t.message.as_str()), Some("second"));
}

// =============================================================
// LoadingIndicator
// =============================================================

#[test]
fn loading_nests() {
    let mut l = LoadingIndicator::default();
    assert!(!l.is_visible());
    l.begin();
    l.begin();
    l.end();
    assert!(l.is_visible());
    l.end();
    assert!(!l.is_visible());
}

#[test]
fn unbalanced_end_saturates() {
    let mut l = LoadingIndicator::default();
    l.end();
    assert!(!l.is_visible());
    l.begin();
    assert!(l.is_visible());
    l.end();
    assert!(!l.is_visible());
}
