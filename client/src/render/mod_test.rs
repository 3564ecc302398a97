use super::*;
use crate::state::dashboard::LoadState;

const TEXT: PlaceholderText = PlaceholderText { loading: "Loading...", failed: "Failed", empty: "Nothing here" };

#[test]
fn loading_and_idle_yield_one_loading_row() {
    for load in [LoadState::<u32>::Idle, LoadState::Loading] {
        let rows = entries(&load, &TEXT, |n| *n);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind(), RowKind::Loading);
    }
}

#[test]
fn failure_yields_one_error_row() {
    let rows = entries(&LoadState::<u32>::Failed("boom".into()), &TEXT, |n| *n);
    assert_eq!(rows, vec![Entry::Placeholder(Placeholder { kind: RowKind::Error, message: "Failed".into() })]);
}

#[test]
fn empty_yields_one_no_data_row() {
    let rows = entries(&LoadState::<u32>::Loaded(vec![]), &TEXT, |n| *n);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind(), RowKind::NoData);
    assert_eq!(rows[0].item(), None);
}

#[test]
fn data_maps_every_item() {
    let rows = entries(&LoadState::Loaded(vec![1_u32, 2, 3]), &TEXT, |n| n * 10);
    assert_eq!(rows.iter().filter_map(Entry::item).copied().collect::<Vec<_>>(), vec![10, 20, 30]);
}

#[test]
fn counts_get_thousands_separators() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1_000), "1,000");
    assert_eq!(format_count(1_234_567), "1,234,567");
}
