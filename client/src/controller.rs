//! Dashboard controller: every user action as an async operation.
//!
//! DESIGN
//! ======
//! The controller owns an `ApiClient` and a `StateHandle`. Each operation
//! reads what it needs from state, awaits the API, then applies the result
//! in one short state update, so nothing holds a borrow across an await.
//! Panel fetches go through generation tokens (`PanelState::begin` /
//! `complete`), which makes overlapping refreshes resolve last-issued-wins.
//!
//! ERROR HANDLING
//! ==============
//! No operation returns an error to its caller. Failures are logged and
//! surfaced as toasts; the boolean results only tell tests and components
//! whether the happy path ran.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{Category, InventoryItem, MaintenanceTask, ReportRecord, Shipment, SpaceAllocation};
use crate::state::dashboard::{DashboardState, ItemOption, PanelState};
use crate::state::forms::{CategoryDraft, ItemDraft, MaintenanceDraft, ShipmentDraft};
use crate::state::modal::{ConfirmRequest, DeleteTarget, FormMode, ModalKind, ModalState};
use crate::state::ui::Section;
use crate::util::report::{self, GeneratedReport, ReportDownload};
use crate::util::{clock, theme};

/// Access to the single `DashboardState`.
///
/// Browser code wraps it in an `RwSignal` so views re-render; tests use a
/// plain `Rc<RefCell<_>>`. A disposed signal yields `R::default()`.
pub trait StateHandle: Clone {
    fn update<R: Default>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R;
    fn read<R: Default>(&self, f: impl FnOnce(&DashboardState) -> R) -> R;
}

impl StateHandle for Rc<RefCell<DashboardState>> {
    fn update<R: Default>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn read<R: Default>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.borrow())
    }
}

impl StateHandle for RwSignal<DashboardState> {
    fn update<R: Default>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        self.try_update(f).unwrap_or_default()
    }

    fn read<R: Default>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        self.try_with_untracked(f).unwrap_or_default()
    }
}

type Slot<E> = fn(&mut DashboardState) -> &mut PanelState<E>;

fn inventory_slot(s: &mut DashboardState) -> &mut PanelState<InventoryItem> {
    &mut s.inventory
}

fn category_slot(s: &mut DashboardState) -> &mut PanelState<Category> {
    &mut s.categories
}

fn shipment_slot(s: &mut DashboardState) -> &mut PanelState<Shipment> {
    &mut s.shipments
}

fn space_slot(s: &mut DashboardState) -> &mut PanelState<SpaceAllocation> {
    &mut s.spaces
}

fn maintenance_slot(s: &mut DashboardState) -> &mut PanelState<MaintenanceTask> {
    &mut s.maintenance
}

fn report_slot(s: &mut DashboardState) -> &mut PanelState<ReportRecord> {
    &mut s.reports
}

fn saved_message(editing: Option<i64>, created: &'static str, updated: &'static str) -> &'static str {
    if editing.is_some() { updated } else { created }
}

/// Retryable failures (network, 5xx, 429) are warnings; the rest are errors.
fn failure_level(err: &ApiError) -> log::Level {
    if err.retryable() { log::Level::Warn } else { log::Level::Error }
}

fn log_failure(context: &str, err: &ApiError) {
    log::log!(failure_level(err), "{context} [{}]: {err}", err.error_code());
}

#[derive(Clone)]
pub struct Controller<T, S> {
    api: ApiClient<T>,
    state: S,
}

impl<T, S> Controller<T, S>
where
    T: Transport + Clone,
    S: StateHandle,
{
    pub fn new(api: ApiClient<T>, state: S) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    fn toast_error(&self, message: impl Into<String>) {
        let message = message.into();
        self.state.update(|s| s.notices.error(message));
    }

    fn toast_success(&self, message: impl Into<String>) {
        let message = message.into();
        self.state.update(|s| s.notices.success(message));
    }

    fn begin_loading(&self) {
        self.state.update(|s| s.loading.begin());
    }

    fn end_loading(&self) {
        self.state.update(|s| s.loading.end());
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Fetch one panel under a fresh generation token. Returns `true` when
    /// the result was current and successful.
    async fn load_panel<E, Fut>(&self, slot: Slot<E>, fetch: Fut, failure: &'static str) -> bool
    where
        Fut: Future<Output = Result<Vec<E>, ApiError>>,
    {
        let token = self.state.update(|s| slot(s).begin());
        let result = fetch.await;
        let failed = match &result {
            Ok(_) => false,
            Err(err) => {
                log_failure(failure, err);
                true
            }
        };
        self.state.update(|s| {
            let applied = slot(s).complete(token, result);
            if applied && failed {
                s.notices.error(failure);
            }
            applied && !failed
        })
    }

    /// Reload the inventory table, then the categories that feed its filter.
    pub async fn refresh_inventory(&self) -> bool {
        let ok = self.load_panel(inventory_slot, self.api.view_inventory(), "Failed to load inventory data").await;
        self.refresh_categories().await;
        ok
    }

    pub async fn refresh_categories(&self) -> bool {
        self.load_panel(category_slot, self.api.all_categories(), "Failed to load categories").await
    }

    /// Inventory rows embed their category, so a loaded inventory panel is
    /// re-fetched along with the category list.
    async fn refresh_category_views(&self) {
        if self.state.read(|s| s.inventory.load.is_loaded()) {
            self.refresh_inventory().await;
        } else {
            self.refresh_categories().await;
        }
    }

    pub async fn refresh_shipments(&self) -> bool {
        self.load_panel(shipment_slot, self.api.all_shipments(), "Failed to load shipment data").await
    }

    pub async fn refresh_spaces(&self) -> bool {
        self.load_panel(space_slot, self.api.view_space(), "Failed to load space data").await
    }

    pub async fn refresh_maintenance(&self) -> bool {
        self.load_panel(maintenance_slot, self.api.view_maintenance(), "Failed to load maintenance data").await
    }

    pub async fn refresh_reports(&self) -> bool {
        self.load_panel(report_slot, self.api.all_reports(), "Failed to load reports").await
    }

    /// Re-fetch the four collections behind the dashboard tiles, one after
    /// another. Each snapshot is applied on its own so one failure leaves
    /// the other tiles intact; any failure raises a single toast.
    pub async fn refresh_summary(&self) -> bool {
        let token = self.state.update(|s| s.summary.begin());
        let mut failed = false;

        let inventory = self.api.view_inventory().await;
        failed |= inventory.is_err();
        self.state.update(|s| s.summary.set_inventory(token, inventory));

        let shipments = self.api.all_shipments().await;
        failed |= shipments.is_err();
        self.state.update(|s| s.summary.set_shipments(token, shipments));

        let spaces = self.api.view_space().await;
        failed |= spaces.is_err();
        self.state.update(|s| s.summary.set_spaces(token, spaces));

        let maintenance = self.api.view_maintenance().await;
        failed |= maintenance.is_err();
        self.state.update(|s| s.summary.set_maintenance(token, maintenance));

        if failed {
            log::warn!("dashboard summary refreshed with failures");
            let current = self.state.read(|s| s.summary.is_current(token));
            if current {
                self.toast_error("Failed to load dashboard data");
            }
        }
        !failed
    }

    /// Dashboard section load, wrapped in the global spinner.
    pub async fn load_dashboard(&self) -> bool {
        self.begin_loading();
        let ok = self.refresh_summary().await;
        self.end_loading();
        ok
    }

    /// Apply the stored theme and load the dashboard.
    pub async fn init(&self) {
        let stored = theme::read_preference();
        theme::apply(stored);
        self.state.update(|s| s.ui.theme = stored);
        self.load_dashboard().await;
    }

    /// Show a sidebar section and fetch its data.
    pub async fn switch_section(&self, section: Section) {
        self.state.update(|s| s.ui.section = section);
        match section {
            Section::Dashboard => {
                self.load_dashboard().await;
            }
            Section::Inventory => {
                self.refresh_inventory().await;
            }
            Section::Shipments => {
                self.refresh_shipments().await;
            }
            Section::Space => {
                self.refresh_spaces().await;
            }
            Section::Maintenance => {
                self.refresh_maintenance().await;
            }
            Section::Reports => {
                self.refresh_reports().await;
            }
        }
    }

    // =========================================================================
    // Modals
    // =========================================================================

    fn modal_is(&self, expected: ModalState) -> bool {
        self.state.read(|s| s.modal == expected)
    }

    /// Open a form modal and run its data-loading step: item choices for
    /// shipments, categories for items, and the record being edited.
    pub async fn open_modal(&self, kind: ModalKind, mode: FormMode) {
        self.state.update(|s| {
            s.drafts.reset(kind);
            s.modal.open(kind, mode);
        });
        let opened = ModalState::Open { kind, mode };

        match kind {
            ModalKind::Item => {
                self.refresh_categories().await;
                if let FormMode::Edit(id) = mode {
                    self.load_item_for_edit(id, opened).await;
                }
            }
            ModalKind::Shipment => {
                self.load_item_options().await;
                if let FormMode::Edit(id) = mode {
                    let draft = self
                        .state
                        .read(|s| s.shipments.items().iter().find(|sh| sh.shipment_id == id).map(ShipmentDraft::from_shipment));
                    match draft {
                        Some(draft) if self.modal_is(opened) => self.state.update(|s| s.drafts.shipment = draft),
                        Some(_) => {}
                        None => self.toast_error("Shipment ID not found for edit"),
                    }
                }
            }
            ModalKind::Maintenance => {
                if let FormMode::Edit(id) = mode {
                    match self.api.get_maintenance(id).await {
                        Ok(Some(task)) if self.modal_is(opened) => {
                            self.state.update(|s| s.drafts.maintenance = MaintenanceDraft::from_task(&task));
                        }
                        Ok(Some(_)) => {}
                        Ok(None) => self.toast_error("Maintenance task not found"),
                        Err(err) => {
                            log_failure("Failed to load maintenance for edit", &err);
                            self.toast_error("Failed to load maintenance data");
                        }
                    }
                }
            }
            ModalKind::Category => {
                self.refresh_categories().await;
                if let FormMode::Edit(id) = mode {
                    self.begin_category_edit(id).await;
                }
            }
            ModalKind::Space => {}
        }
    }

    async fn load_item_for_edit(&self, id: i64, opened: ModalState) {
        match self.api.view_inventory().await {
            Ok(items) => match items.iter().find(|i| i.item_id == id) {
                Some(item) if self.modal_is(opened) => {
                    let draft = ItemDraft::from_item(item);
                    self.state.update(|s| s.drafts.item = draft);
                }
                Some(_) => {}
                None => self.toast_error("Item not found"),
            },
            Err(err) => {
                log_failure("Failed to load item for edit", &err);
                self.toast_error("Failed to load item data");
            }
        }
    }

    /// Populate the shipment form's item dropdown from inventory.
    pub async fn load_item_options(&self) -> bool {
        match self.api.view_inventory().await {
            Ok(items) => {
                let options: Vec<ItemOption> = items.iter().map(ItemOption::from_item).collect();
                self.state.update(|s| s.item_options = options);
                true
            }
            Err(err) => {
                log_failure("Failed to load items for dropdown", &err);
                self.state.update(|s| s.item_options.clear());
                self.toast_error("Failed to load items");
                false
            }
        }
    }

    /// Load a category into the manager's form and switch it to edit mode.
    pub async fn begin_category_edit(&self, id: i64) {
        match self.api.get_category(id).await {
            Ok(Some(category)) => self.state.update(|s| {
                if s.modal.kind() == Some(ModalKind::Category) {
                    s.drafts.category = CategoryDraft::from_category(&category);
                    s.modal.set_mode(FormMode::Edit(id));
                }
            }),
            Ok(None) => self.toast_error("Category not found"),
            Err(err) => {
                log_failure("Failed to load category for edit", &err);
                self.toast_error("Failed to load category data");
            }
        }
    }

    /// Leave category edit mode without closing the manager.
    pub fn cancel_category_edit(&self) {
        self.state.update(|s| {
            s.drafts.reset(ModalKind::Category);
            s.modal.set_mode(FormMode::Create);
        });
    }

    /// Close the open modal, discarding its draft and editing id.
    pub fn close_modal(&self) {
        self.state.update(|s| {
            if let Some(kind) = s.modal.kind() {
                s.drafts.reset(kind);
            }
            s.modal.close();
        });
    }

    /// Escape/backdrop: dismiss the confirmation first, then the modal.
    pub fn dismiss_overlay(&self) {
        let confirming = self.state.read(|s| s.confirm.is_some());
        if confirming {
            self.cancel_delete();
        } else {
            self.close_modal();
        }
    }

    // =========================================================================
    // Submits
    // =========================================================================

    fn reject(&self, err: &ApiError) -> bool {
        log::warn!("form rejected: {err}");
        self.toast_error(err.to_string());
        false
    }

    /// Common tail of a submit: close and toast on success, toast on failure.
    fn settle(&self, result: Result<(), ApiError>, success: &'static str, failure: &'static str) -> bool {
        match result {
            Ok(()) => {
                self.close_modal();
                self.toast_success(success);
                true
            }
            Err(err) => {
                log_failure(failure, &err);
                self.toast_error(format!("{failure}: {err}"));
                false
            }
        }
    }

    pub async fn submit_item(&self) -> bool {
        let (draft, editing) = self.state.read(|s| (s.drafts.item.clone(), s.modal.editing_id()));
        let payload = match draft.to_payload(editing) {
            Ok(payload) => payload,
            Err(err) => return self.reject(&err),
        };
        self.begin_loading();
        let result = if editing.is_some() {
            self.api.update_inventory(&payload).await
        } else {
            self.api.add_inventory(&payload).await
        };
        let ok = result.is_ok();
        if ok {
            self.refresh_inventory().await;
            self.refresh_summary().await;
        }
        let settled = self.settle(
            result,
            saved_message(editing, "Item added successfully", "Item updated successfully"),
            "Failed to save item",
        );
        self.end_loading();
        ok && settled
    }

    pub async fn submit_shipment(&self) -> bool {
        let (draft, editing) = self.state.read(|s| (s.drafts.shipment.clone(), s.modal.editing_id()));
        let payload = match draft.to_payload(&clock::now_iso()) {
            Ok(payload) => payload,
            Err(err) => return self.reject(&err),
        };
        self.begin_loading();
        let result = match editing {
            Some(id) => self.api.dispatch_shipment(id, &payload).await,
            None => self.api.receive_shipment(&payload).await,
        };
        let ok = result.is_ok();
        if ok {
            self.refresh_shipments().await;
            self.refresh_summary().await;
        }
        let settled = self.settle(
            result,
            saved_message(editing, "Shipment created successfully", "Shipment updated successfully"),
            "Failed to create/update shipment",
        );
        self.end_loading();
        ok && settled
    }

    pub async fn submit_space(&self) -> bool {
        let draft = self.state.read(|s| s.drafts.space.clone());
        let payload = match draft.to_payload() {
            Ok(payload) => payload,
            Err(err) => return self.reject(&err),
        };
        self.begin_loading();
        let result = self.api.allocate_space(&payload).await;
        let ok = result.is_ok();
        if ok {
            self.refresh_spaces().await;
            self.refresh_summary().await;
        }
        let settled = self.settle(result, "Space allocated successfully", "Failed to allocate space");
        self.end_loading();
        ok && settled
    }

    pub async fn submit_maintenance(&self) -> bool {
        let (draft, editing) = self.state.read(|s| (s.drafts.maintenance.clone(), s.modal.editing_id()));
        let payload = match draft.to_payload(editing) {
            Ok(payload) => payload,
            Err(err) => return self.reject(&err),
        };
        self.begin_loading();
        let result = if editing.is_some() {
            self.api.update_maintenance(&payload).await
        } else {
            self.api.schedule_maintenance(&payload).await
        };
        let ok = result.is_ok();
        if ok {
            self.refresh_maintenance().await;
            self.refresh_summary().await;
        }
        let settled = self.settle(
            result,
            saved_message(editing, "Maintenance scheduled successfully", "Maintenance updated successfully"),
            "Failed to save maintenance",
        );
        self.end_loading();
        ok && settled
    }

    /// Add or update a category. The manager stays open for further edits.
    pub async fn submit_category(&self) -> bool {
        let (draft, editing) = self.state.read(|s| (s.drafts.category.clone(), s.modal.editing_id()));
        let payload = match draft.to_payload() {
            Ok(payload) => payload,
            Err(err) => return self.reject(&err),
        };
        self.begin_loading();
        let result = match editing {
            Some(id) => self.api.update_category(id, &payload).await,
            None => self.api.add_category(&payload).await,
        };
        let ok = match result {
            Ok(()) => {
                self.cancel_category_edit();
                self.refresh_category_views().await;
                self.toast_success(saved_message(
                    editing,
                    "Category added successfully",
                    "Category updated successfully",
                ));
                true
            }
            Err(err) => {
                log_failure("Failed to save category", &err);
                self.toast_error(format!("Failed to save category: {err}"));
                false
            }
        };
        self.end_loading();
        ok
    }

    // =========================================================================
    // Deletes
    // =========================================================================

    /// Ask for confirmation before deleting `target`.
    pub fn request_delete(&self, target: DeleteTarget) {
        self.state.update(|s| s.confirm = Some(ConfirmRequest::new(target)));
    }

    pub fn cancel_delete(&self) {
        self.state.update(|s| s.confirm = None);
    }

    /// Run the confirmed delete, drop the record locally and refresh the
    /// dashboard aggregates.
    pub async fn confirm_delete(&self) -> bool {
        let Some(request) = self.state.update(|s| s.confirm.take()) else {
            return false;
        };
        let target = request.target;
        self.begin_loading();
        let result = match &target {
            DeleteTarget::Inventory { id, .. } => self.api.remove_inventory(*id).await,
            DeleteTarget::Shipment { id } => self.api.delete_shipment(*id).await,
            DeleteTarget::Category { id } => self.api.delete_category(*id).await,
            DeleteTarget::Space { id } => self.api.free_space(*id).await,
        };
        let ok = match result {
            Ok(()) => {
                self.state.update(|s| match &target {
                    DeleteTarget::Inventory { id, .. } => {
                        s.inventory.retain(|i| i.item_id != *id);
                        s.summary.note_item_removed(*id);
                    }
                    DeleteTarget::Shipment { id } => {
                        s.shipments.retain(|sh| sh.shipment_id != *id);
                        s.summary.note_shipment_removed(*id);
                    }
                    DeleteTarget::Category { id } => s.categories.retain(|c| c.category_id != *id),
                    DeleteTarget::Space { id } => {
                        s.spaces.retain(|sp| sp.space_id != *id);
                        s.summary.note_space_removed(*id);
                    }
                });
                self.toast_success(target.success_message());
                if matches!(target, DeleteTarget::Category { .. }) {
                    self.refresh_category_views().await;
                } else {
                    self.refresh_summary().await;
                }
                true
            }
            Err(err) => {
                log_failure(target.failure_message(), &err);
                self.toast_error(target.failure_message());
                false
            }
        };
        self.end_loading();
        ok
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Generate a report for the selected type and range and keep the
    /// returned record for preview and download.
    pub async fn generate_report(&self) -> bool {
        let (report_type, range_days, today) =
            self.state.read(|s| (s.ui.report_type, s.ui.report_range_days, s.today));
        let today = today.unwrap_or_else(clock::today);
        let request = report::report_request(report_type, range_days);
        self.begin_loading();
        let ok = match self.api.generate_report(&request).await {
            Ok(Some(record)) => {
                let generated = GeneratedReport::new(record, report_type, range_days, today);
                self.state.update(|s| s.report = Some(generated));
                self.toast_success("Report generated successfully");
                self.refresh_reports().await;
                true
            }
            Ok(None) => {
                log::warn!("report/generate answered without a body");
                self.state.update(|s| s.notices.warning("Report service returned no report"));
                false
            }
            Err(err) => {
                log_failure("Failed to generate report", &err);
                self.toast_error(format!("Failed to generate report: {err}"));
                false
            }
        };
        self.end_loading();
        ok
    }

    /// Show a stored report from the history list in the preview.
    pub async fn view_report(&self, id: i64) -> bool {
        let (range_days, today) = self.state.read(|s| (s.ui.report_range_days, s.today));
        let today = today.unwrap_or_else(clock::today);
        match self.api.get_report(id).await {
            Ok(Some(record)) => {
                let fallback = report::ReportType::from_value(&record.report_type).unwrap_or_default();
                let generated = GeneratedReport::new(record, fallback, range_days, today);
                self.state.update(|s| s.report = Some(generated));
                true
            }
            Ok(None) => {
                self.toast_error("Report not found");
                false
            }
            Err(err) => {
                log_failure(&format!("Failed to load report {id}"), &err);
                self.toast_error("Failed to load report");
                false
            }
        }
    }

    /// Download the previewed report as text.
    pub fn download_report(&self) -> Option<ReportDownload> {
        let download = self.state.read(|s| s.report.as_ref().map(GeneratedReport::download));
        match &download {
            Some(file) => {
                report::trigger_download(file);
                self.toast_success("Report downloaded successfully");
            }
            None => {
                self.state.update(|s| s.notices.warning("Generate a report first"));
            }
        }
        download
    }

    // =========================================================================
    // Chrome
    // =========================================================================

    pub fn change_month(&self, delta: i32) {
        self.state.update(|s| s.ui.calendar_month = s.ui.calendar_month.shift(delta));
    }

    pub fn toggle_theme(&self) {
        let current = self.state.read(|s| s.ui.theme);
        let next = theme::toggle(current);
        self.state.update(|s| {
            s.ui.theme = next;
            s.notices.success(next.enabled_message());
        });
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.state.update(|s| s.notices.dismiss(id));
    }
}
