//! Modal host and delete confirmation overlay.
//!
//! DESIGN
//! ======
//! One frame draws whichever form `ModalState` names. The confirmation is
//! a separate overlay above it, so a category delete can be confirmed while
//! the category manager stays open. Backdrop clicks close the top layer.

use leptos::prelude::*;

use crate::app::Actions;
use crate::components::category_manager::CategoryManager;
use crate::components::forms::{ItemForm, MaintenanceForm, ShipmentForm, SpaceForm};
use crate::state::dashboard::DashboardState;
use crate::state::modal::{CONFIRM_TITLE, ModalKind};

#[component]
pub fn ModalHost() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();
    let modal = Memo::new(move |_| state.with(|s| s.modal));
    let kind = Memo::new(move |_| modal.get().kind());

    let close = move |_| actions.run(|c| c.close_modal());

    view! {
        <Show when=move || modal.get().is_open()>
            <div class="modal-overlay" on:click=close>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{move || modal.get().title()}</h2>
                        <button class="close-btn" title="Close" on:click=close>
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">
                        {move || match kind.get() {
                            Some(ModalKind::Item) => view! { <ItemForm/> }.into_any(),
                            Some(ModalKind::Shipment) => view! { <ShipmentForm/> }.into_any(),
                            Some(ModalKind::Space) => view! { <SpaceForm/> }.into_any(),
                            Some(ModalKind::Maintenance) => view! { <MaintenanceForm/> }.into_any(),
                            Some(ModalKind::Category) => view! { <CategoryManager/> }.into_any(),
                            None => ().into_any(),
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();
    let message = Memo::new(move |_| state.with(|s| s.confirm.as_ref().map(|c| c.message.clone())));

    let cancel = move |_| actions.run(|c| c.cancel_delete());
    let confirm = move |_| {
        actions.spawn(|c| async move {
            c.confirm_delete().await;
        });
    };

    view! {
        <Show when=move || message.get().is_some()>
            <div class="modal-overlay confirm-overlay" on:click=cancel>
                <div class="modal confirm-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{CONFIRM_TITLE}</h2>
                    </div>
                    <div class="modal-body">
                        <p class="confirm-message">{move || message.get().unwrap_or_default()}</p>
                        <div class="form-actions">
                            <button class="btn btn-secondary" on:click=cancel>
                                "Cancel"
                            </button>
                            <button class="btn btn-danger" on:click=confirm>
                                "Confirm"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
