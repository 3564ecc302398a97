//! Leptos view components.
//!
//! Components read the shared `RwSignal<DashboardState>` and dispatch
//! through `Actions`; the row and card models they draw come from
//! `crate::render`.

pub mod calendar;
pub mod category_manager;
pub mod data_table;
pub mod feedback;
pub mod fields;
pub mod forms;
pub mod inventory_panel;
pub mod maintenance_panel;
pub mod modal;
pub mod overview;
pub mod report_panel;
pub mod shipment_panel;
pub mod sidebar;
pub mod space_panel;
