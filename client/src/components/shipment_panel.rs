//! Shipments section: search, status filter and the shipment table.

use leptos::prelude::*;

use crate::app::Actions;
use crate::components::data_table::DataTable;
use crate::render::filter::{self, SHIPMENT_FILTER};
use crate::render::{TableRow, shipments};
use crate::state::dashboard::DashboardState;
use crate::state::modal::{DeleteTarget, FormMode, ModalKind};

#[component]
pub fn ShipmentPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();

    let entries = Memo::new(move |_| state.with(|s| shipments::rows(&s.shipments.load)));
    let query = Memo::new(move |_| {
        state.with(|s| (s.ui.filters.shipment_search.clone(), s.ui.filters.status_filter.clone()))
    });
    let rows = Signal::derive(move || {
        let entries = entries.get();
        let (search, status) = query.get();
        let shown = filter::visibility(&entries, SHIPMENT_FILTER, &search, &status);
        entries.into_iter().zip(shown).collect::<Vec<_>>()
    });
    let options = Memo::new(move |_| state.with(|s| filter::status_options(s.shipments.items())));

    let on_edit = Callback::new(move |id: i64| {
        actions.spawn(move |c| async move {
            c.open_modal(ModalKind::Shipment, FormMode::Edit(id)).await;
        });
    });
    let on_delete = Callback::new(move |row: TableRow| {
        actions.run(|c| c.request_delete(DeleteTarget::Shipment { id: row.key }));
    });
    let on_create = move |_| {
        actions.spawn(|c| async move {
            c.open_modal(ModalKind::Shipment, FormMode::Create).await;
        });
    };

    view! {
        <section class="content-section shipments-section">
            <div class="section-header">
                <h2>"Shipment Tracking"</h2>
                <div class="section-actions">
                    <button class="btn btn-primary" on:click=on_create>
                        <i class="fas fa-plus"></i>
                        " New Shipment"
                    </button>
                </div>
            </div>
            <div class="filters">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search shipments..."
                    prop:value=move || state.with(|s| s.ui.filters.shipment_search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.ui.filters.shipment_search = value);
                    }
                />
                <select
                    class="filter-select"
                    prop:value=move || state.with(|s| s.ui.filters.status_filter.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.ui.filters.status_filter = value);
                    }
                >
                    <option value="">"All Statuses"</option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|status| {
                                let label = status.clone();
                                view! { <option value=status>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <DataTable headers=&shipments::HEADERS rows=rows on_edit=on_edit on_delete=on_delete/>
        </section>
    }
}
