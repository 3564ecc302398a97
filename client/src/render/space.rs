//! Space allocation cards.

#[cfg(test)]
#[path = "space_test.rs"]
mod space_test;

use super::{Entry, PlaceholderText, entries};
use crate::net::types::SpaceAllocation;
use crate::state::dashboard::LoadState;

pub const TEXT: PlaceholderText = PlaceholderText {
    loading: "Loading space allocation data...",
    failed: "Failed to load space data",
    empty: "No space allocation data found",
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpaceCard {
    pub key: i64,
    pub title: String,
    pub total: String,
    pub used: String,
    pub available: String,
    pub percent: u32,
    /// Progress bar fill, capped at 100 for over-allocated zones.
    pub bar_width: u32,
    pub percent_label: String,
}

fn sq_ft(n: u32) -> String {
    format!("{n} sq ft")
}

#[must_use]
pub fn card(space: &SpaceAllocation) -> SpaceCard {
    let percent = space.utilization_percent();
    SpaceCard {
        key: space.space_id,
        title: format!("Zone {}", space.zone),
        total: sq_ft(space.total_capacity),
        used: sq_ft(space.used_capacity),
        available: sq_ft(space.available()),
        percent,
        bar_width: percent.min(100),
        percent_label: format!("{percent}% Used"),
    }
}

#[must_use]
pub fn cards(load: &LoadState<SpaceAllocation>) -> Vec<Entry<SpaceCard>> {
    entries(load, &TEXT, card)
}
