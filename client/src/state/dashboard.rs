//! Dashboard state: every fetched collection plus modal, toast and UI state.
//!
//! DESIGN
//! ======
//! One `DashboardState` value replaces the page-global variables a DOM
//! script would use. Each panel owns a request-generation token: `begin`
//! hands out a new token and marks the panel loading, `complete` applies a
//! result only if its token is still the newest, so a slow response can
//! never overwrite a newer one (last-issued wins).
//!
//! The dashboard summary keeps its own snapshots of the four collections it
//! reduces, fetched sequentially under a single token. A failed snapshot
//! only degrades the tiles computed from it.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use time::Date;

use crate::net::error::ApiError;
use crate::net::types::{Category, InventoryItem, MaintenanceTask, ReportRecord, Shipment, SpaceAllocation};
use crate::state::forms::FormDrafts;
use crate::state::modal::{ConfirmRequest, ModalState};
use crate::state::notify::{LoadingIndicator, Notifications};
use crate::state::ui::UiState;
use crate::util::report::GeneratedReport;

/// Fetch status of one collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    /// Loaded items, empty in every other state.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) => Self::Loaded(items),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// A collection backing one panel, guarded by a generation token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelState<T> {
    pub load: LoadState<T>,
    generation: u64,
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        Self { load: LoadState::Idle, generation: 0 }
    }
}

impl<T> PanelState<T> {
    /// Start a fetch: mark loading and return its token.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.load = LoadState::Loading;
        self.generation
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when a
    /// newer fetch has started since `token` was issued.
    pub fn complete(&mut self, token: u64, result: Result<Vec<T>, ApiError>) -> bool {
        if token != self.generation {
            return false;
        }
        self.load = LoadState::from_result(result);
        true
    }

    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        self.load.items()
    }

    /// Drop loaded items in place; other states are untouched.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        if let LoadState::Loaded(items) = &mut self.load {
            items.retain(keep);
        }
    }
}

/// Collections the dashboard tiles reduce.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub inventory: LoadState<InventoryItem>,
    pub shipments: LoadState<Shipment>,
    pub spaces: LoadState<SpaceAllocation>,
    pub maintenance: LoadState<MaintenanceTask>,
    generation: u64,
}

impl DashboardSummary {
    /// Start a refresh. Previous snapshots stay visible until replaced.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }

    pub fn set_inventory(&mut self, token: u64, result: Result<Vec<InventoryItem>, ApiError>) -> bool {
        if !self.accept(token) {
            return false;
        }
        self.inventory = LoadState::from_result(result);
        true
    }

    pub fn set_shipments(&mut self, token: u64, result: Result<Vec<Shipment>, ApiError>) -> bool {
        if !self.accept(token) {
            return false;
        }
        self.shipments = LoadState::from_result(result);
        true
    }

    pub fn set_spaces(&mut self, token: u64, result: Result<Vec<SpaceAllocation>, ApiError>) -> bool {
        if !self.accept(token) {
            return false;
        }
        self.spaces = LoadState::from_result(result);
        true
    }

    pub fn set_maintenance(&mut self, token: u64, result: Result<Vec<MaintenanceTask>, ApiError>) -> bool {
        if !self.accept(token) {
            return false;
        }
        self.maintenance = LoadState::from_result(result);
        true
    }

    fn accept(&self, token: u64) -> bool {
        token == self.generation
    }

    /// Local bookkeeping after a confirmed shipment delete.
    pub fn note_shipment_removed(&mut self, id: i64) {
        if let LoadState::Loaded(items) = &mut self.shipments {
            items.retain(|s| s.shipment_id != id);
        }
    }

    /// Local bookkeeping after a confirmed inventory delete.
    pub fn note_item_removed(&mut self, id: i64) {
        if let LoadState::Loaded(items) = &mut self.inventory {
            items.retain(|i| i.item_id != id);
        }
    }

    /// Local bookkeeping after a space allocation is freed.
    pub fn note_space_removed(&mut self, id: i64) {
        if let LoadState::Loaded(items) = &mut self.spaces {
            items.retain(|s| s.space_id != id);
        }
    }
}

/// Entry of the shipment form's item dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemOption {
    pub id: i64,
    pub label: String,
}

impl ItemOption {
    #[must_use]
    pub fn from_item(item: &InventoryItem) -> Self {
        Self { id: item.item_id, label: format!("{} (ID: {})", item.item_name, item.item_id) }
    }
}

/// Everything the dashboard renders.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub ui: UiState,
    pub inventory: PanelState<InventoryItem>,
    pub categories: PanelState<Category>,
    pub shipments: PanelState<Shipment>,
    pub spaces: PanelState<SpaceAllocation>,
    pub maintenance: PanelState<MaintenanceTask>,
    pub reports: PanelState<ReportRecord>,
    pub summary: DashboardSummary,
    pub modal: ModalState,
    pub confirm: Option<ConfirmRequest>,
    pub drafts: FormDrafts,
    pub item_options: Vec<ItemOption>,
    pub report: Option<GeneratedReport>,
    pub notices: Notifications,
    pub loading: LoadingIndicator,
    pub today: Option<Date>,
}

impl DashboardState {
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self { ui: UiState::starting(today), today: Some(today), ..Self::default() }
    }

    /// Body scrolling is suppressed while any modal or confirmation is up.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.modal.is_open() || self.confirm.is_some()
    }
}
