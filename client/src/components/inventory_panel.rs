//! Inventory section: search, category filter and the item table.

use leptos::prelude::*;

use crate::app::Actions;
use crate::components::data_table::DataTable;
use crate::render::filter::{self, INVENTORY_FILTER};
use crate::render::{TableRow, inventory};
use crate::state::dashboard::DashboardState;
use crate::state::modal::{DeleteTarget, FormMode, ModalKind};

#[component]
pub fn InventoryPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();

    let entries = Memo::new(move |_| state.with(|s| inventory::rows(&s.inventory.load)));
    let query = Memo::new(move |_| {
        state.with(|s| (s.ui.filters.inventory_search.clone(), s.ui.filters.category_filter.clone()))
    });
    let rows = Signal::derive(move || {
        let entries = entries.get();
        let (search, category) = query.get();
        let shown = filter::visibility(&entries, INVENTORY_FILTER, &search, &category);
        entries.into_iter().zip(shown).collect::<Vec<_>>()
    });
    let options = Memo::new(move |_| state.with(|s| filter::category_options(s.categories.items())));

    let on_edit = Callback::new(move |id: i64| {
        actions.spawn(move |c| async move {
            c.open_modal(ModalKind::Item, FormMode::Edit(id)).await;
        });
    });
    let on_delete = Callback::new(move |row: TableRow| {
        let name = row.cells.get(1).cloned().unwrap_or_default();
        actions.run(|c| c.request_delete(DeleteTarget::Inventory { id: row.key, name }));
    });
    let open = move |kind: ModalKind| {
        actions.spawn(move |c| async move {
            c.open_modal(kind, FormMode::Create).await;
        });
    };

    view! {
        <section class="content-section inventory-section">
            <div class="section-header">
                <h2>"Inventory Management"</h2>
                <div class="section-actions">
                    <button class="btn btn-secondary" on:click=move |_| open(ModalKind::Category)>
                        <i class="fas fa-tags"></i>
                        " Manage Categories"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| open(ModalKind::Item)>
                        <i class="fas fa-plus"></i>
                        " Add Item"
                    </button>
                </div>
            </div>
            <div class="filters">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search inventory..."
                    prop:value=move || state.with(|s| s.ui.filters.inventory_search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.ui.filters.inventory_search = value);
                    }
                />
                <select
                    class="filter-select"
                    prop:value=move || state.with(|s| s.ui.filters.category_filter.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.ui.filters.category_filter = value);
                    }
                >
                    <option value="">"All Categories"</option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|name| {
                                let label = name.clone();
                                view! { <option value=name>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <DataTable headers=&inventory::HEADERS rows=rows on_edit=on_edit on_delete=on_delete/>
        </section>
    }
}
