//! Dashboard page: sidebar, the active section and the overlay layers.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On hydration it applies the stored theme and
//! loads the dashboard aggregates; every later fetch is triggered by
//! navigation or a mutation through `Actions`.

use leptos::prelude::*;

use crate::app::Actions;
use crate::components::feedback::{LoadingSpinner, ToastStack};
use crate::components::inventory_panel::InventoryPanel;
use crate::components::maintenance_panel::MaintenancePanel;
use crate::components::modal::{ConfirmDialog, ModalHost};
use crate::components::overview::Overview;
use crate::components::report_panel::ReportPanel;
use crate::components::shipment_panel::ShipmentPanel;
use crate::components::sidebar::Sidebar;
use crate::components::space_panel::SpacePanel;
use crate::state::dashboard::DashboardState;
use crate::state::ui::Section;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();
    let section = Memo::new(move |_| state.with(|s| s.ui.section));
    let scroll_locked = Memo::new(move |_| state.with(DashboardState::scroll_locked));

    // Effects only run in the browser.
    Effect::new(move || {
        actions.spawn(|c| async move {
            c.init().await;
        });
    });

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let locked = scroll_locked.get();
            if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.style().set_property("overflow", if locked { "hidden" } else { "" });
            }
        });

        let escape = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                actions.run(|c| c.dismiss_overlay());
            }
        });
        on_cleanup(move || escape.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = scroll_locked;

    view! {
        <div class="app-container">
            <Sidebar/>
            <main class="main-content">
                <header class="content-header">
                    <h1>{move || section.get().label()}</h1>
                </header>
                {move || match section.get() {
                    Section::Dashboard => view! { <Overview/> }.into_any(),
                    Section::Inventory => view! { <InventoryPanel/> }.into_any(),
                    Section::Shipments => view! { <ShipmentPanel/> }.into_any(),
                    Section::Space => view! { <SpacePanel/> }.into_any(),
                    Section::Maintenance => view! { <MaintenancePanel/> }.into_any(),
                    Section::Reports => view! { <ReportPanel/> }.into_any(),
                }}
            </main>
            <ModalHost/>
            <ConfirmDialog/>
            <ToastStack/>
            <LoadingSpinner/>
        </div>
    }
}
