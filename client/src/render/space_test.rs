use super::*;
use crate::render::RowKind;

fn space(total: u32, used: u32) -> SpaceAllocation {
    SpaceAllocation { space_id: 4, zone: "A".into(), total_capacity: total, used_capacity: used, available_capacity: 999 }
}

#[test]
fn card_shows_recomputed_available_and_percent() {
    let card = card(&space(100, 40));
    assert_eq!(card.title, "Zone A");
    assert_eq!(card.available, "60 sq ft");
    assert_eq!(card.percent_label, "40% Used");
    assert_eq!(card.bar_width, 40);
}

#[test]
fn over_allocated_bar_is_capped() {
    let card = card(&space(50, 75));
    assert_eq!(card.percent, 150);
    assert_eq!(card.bar_width, 100);
    assert_eq!(card.available, "0 sq ft");
}

#[test]
fn zero_capacity_is_zero_percent() {
    assert_eq!(card(&space(0, 0)).percent_label, "0% Used");
}

#[test]
fn empty_list_is_one_placeholder_card() {
    let cards = cards(&LoadState::Loaded(vec![]));
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].kind(), RowKind::NoData);
}
