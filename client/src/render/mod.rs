//! Pure view models for every panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule turns a `LoadState` (or summary snapshot) into rows, cards
//! or tiles that components draw without further logic. Loading, failure
//! and empty datasets all collapse to exactly one placeholder entry so no
//! panel ever renders blank.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod categories;
pub mod filter;
pub mod inventory;
pub mod maintenance;
pub mod reports;
pub mod shipments;
pub mod space;
pub mod summary;

use crate::state::dashboard::LoadState;

/// What a rendered row represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    Data,
    Loading,
    Error,
    NoData,
}

impl RowKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Data => "data-row",
            Self::Loading => "loading-row",
            Self::Error => "error-row",
            Self::NoData => "no-data",
        }
    }
}

/// Stand-in entry for a panel with nothing to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: RowKind,
    pub message: String,
}

/// Messages a panel shows for each non-data state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceholderText {
    pub loading: &'static str,
    pub failed: &'static str,
    pub empty: &'static str,
}

/// Either a real row/card or the panel's placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry<R> {
    Item(R),
    Placeholder(Placeholder),
}

impl<R> Entry<R> {
    #[must_use]
    pub fn kind(&self) -> RowKind {
        match self {
            Self::Item(_) => RowKind::Data,
            Self::Placeholder(p) => p.kind,
        }
    }

    #[must_use]
    pub fn item(&self) -> Option<&R> {
        match self {
            Self::Item(row) => Some(row),
            Self::Placeholder(_) => None,
        }
    }
}

fn placeholder<R>(kind: RowKind, message: &str) -> Vec<Entry<R>> {
    vec![Entry::Placeholder(Placeholder { kind, message: message.to_owned() })]
}

/// Map a collection to entries, or to its single placeholder.
pub fn entries<T, R>(load: &LoadState<T>, text: &PlaceholderText, row: impl Fn(&T) -> R) -> Vec<Entry<R>> {
    match load {
        LoadState::Idle | LoadState::Loading => placeholder(RowKind::Loading, text.loading),
        LoadState::Failed(_) => placeholder(RowKind::Error, text.failed),
        LoadState::Loaded(items) if items.is_empty() => placeholder(RowKind::NoData, text.empty),
        LoadState::Loaded(items) => items.iter().map(|item| Entry::Item(row(item))).collect(),
    }
}

/// Status/category pill inside a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub class: String,
}

/// A table row: entity key, cell text and the badge shown in one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub key: i64,
    pub cells: Vec<String>,
    pub badge_column: usize,
    pub badge: Badge,
}

/// Group digits in threes: `12345` → `"12,345"`.
#[must_use]
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
