//! Local UI chrome state (active section, theme, filters, selectors).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the fetched panel data so
//! rendering controls can evolve independently of server state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use time::Date;

use crate::util::calendar::CalendarMonth;
use crate::util::report::{DEFAULT_RANGE_DAYS, ReportType};
use crate::util::theme::Theme;

/// Sidebar sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Dashboard,
    Inventory,
    Shipments,
    Space,
    Maintenance,
    Reports,
}

impl Section {
    pub const ALL: [Self; 6] =
        [Self::Dashboard, Self::Inventory, Self::Shipments, Self::Space, Self::Maintenance, Self::Reports];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Inventory => "Inventory",
            Self::Shipments => "Shipments",
            Self::Space => "Space Management",
            Self::Maintenance => "Maintenance",
            Self::Reports => "Reports",
        }
    }

    /// Font Awesome icon name.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "tachometer-alt",
            Self::Inventory => "boxes",
            Self::Shipments => "shipping-fast",
            Self::Space => "warehouse",
            Self::Maintenance => "tools",
            Self::Reports => "chart-bar",
        }
    }
}

/// Search and filter inputs above the two tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterControls {
    pub inventory_search: String,
    pub category_filter: String,
    pub shipment_search: String,
    pub status_filter: String,
}

/// UI state for navigation, theme, filters and selectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub section: Section,
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    pub calendar_month: CalendarMonth,
    pub filters: FilterControls,
    pub report_type: ReportType,
    pub report_range_days: u32,
}

impl UiState {
    /// Fresh state with the calendar on the month containing `today`.
    #[must_use]
    pub fn starting(today: Date) -> Self {
        Self { calendar_month: CalendarMonth::containing(today), ..Self::default() }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            section: Section::Dashboard,
            theme: Theme::Light,
            sidebar_collapsed: false,
            calendar_month: CalendarMonth { year: 1970, month: time::Month::January },
            filters: FilterControls::default(),
            report_type: ReportType::Inventory,
            report_range_days: DEFAULT_RANGE_DAYS,
        }
    }
}
