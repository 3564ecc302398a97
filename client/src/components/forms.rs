//! Item, shipment, space and maintenance forms shown inside `ModalHost`.

use leptos::prelude::*;

use crate::app::Actions;
use crate::components::fields::{InputField, SelectField, TextAreaField};
use crate::net::types::{MaintenanceStatus, ShipmentStatus};
use crate::state::dashboard::DashboardState;
use crate::state::forms::ZONE_OPTIONS;

fn labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<(String, String)> {
    labels.into_iter().map(|l| (l.to_owned(), l.to_owned())).collect()
}

#[component]
fn FormActions(submit_label: Signal<&'static str>) -> impl IntoView {
    let actions = expect_context::<Actions>();
    view! {
        <div class="form-actions">
            <button type="button" class="btn btn-secondary" on:click=move |_| actions.run(|c| c.close_modal())>
                "Cancel"
            </button>
            <button type="submit" class="btn btn-primary">
                {move || submit_label.get()}
            </button>
        </div>
    }
}

fn submit_label(state: RwSignal<DashboardState>, create: &'static str, edit: &'static str) -> Signal<&'static str> {
    Signal::derive(move || if state.with(|s| s.modal.editing_id().is_some()) { edit } else { create })
}

#[component]
pub fn ItemForm() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();
    let categories = Signal::derive(move || {
        state.with(|s| {
            s.categories
                .items()
                .iter()
                .map(|c| (c.category_id.to_string(), c.category_name.clone()))
                .collect::<Vec<_>>()
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions.spawn(|c| async move {
            c.submit_item().await;
        });
    };

    view! {
        <form class="modal-form" on:submit=on_submit>
            <InputField
                label="Item Name"
                read=|s| s.drafts.item.name.clone()
                write=|s, v| s.drafts.item.name = v
            />
            <SelectField
                label="Category"
                blank="Uncategorized"
                options=categories
                read=|s| s.drafts.item.category_id.clone()
                write=|s, v| s.drafts.item.category_id = v
            />
            <InputField
                label="Quantity"
                kind="number"
                read=|s| s.drafts.item.quantity.clone()
                write=|s, v| s.drafts.item.quantity = v
            />
            <InputField
                label="Location"
                read=|s| s.drafts.item.location.clone()
                write=|s, v| s.drafts.item.location = v
            />
            <FormActions submit_label=submit_label(state, "Add Item", "Update Item")/>
        </form>
    }
}

#[component]
pub fn ShipmentForm() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();
    let items = Signal::derive(move || {
        state.with(|s| s.item_options.iter().map(|o| (o.id.to_string(), o.label.clone())).collect::<Vec<_>>())
    });
    let statuses = Signal::derive(|| labels(ShipmentStatus::KNOWN.iter().map(ShipmentStatus::label)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions.spawn(|c| async move {
            c.submit_shipment().await;
        });
    };

    view! {
        <form class="modal-form" on:submit=on_submit>
            <SelectField
                label="Item"
                blank="Select Item"
                options=items
                read=|s| s.drafts.shipment.item_id.clone()
                write=|s, v| s.drafts.shipment.item_id = v
            />
            <InputField
                label="Origin"
                read=|s| s.drafts.shipment.origin.clone()
                write=|s, v| s.drafts.shipment.origin = v
            />
            <InputField
                label="Destination"
                read=|s| s.drafts.shipment.destination.clone()
                write=|s, v| s.drafts.shipment.destination = v
            />
            <SelectField
                label="Status"
                options=statuses
                read=|s| s.drafts.shipment.status.clone()
                write=|s, v| s.drafts.shipment.status = v
            />
            <InputField
                label="Expected Delivery"
                kind="date"
                read=|s| s.drafts.shipment.expected_delivery_date.clone()
                write=|s, v| s.drafts.shipment.expected_delivery_date = v
            />
            <FormActions submit_label=submit_label(state, "Create Shipment", "Update Shipment")/>
        </form>
    }
}

#[component]
pub fn SpaceForm() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();
    let zones = Signal::derive(|| ZONE_OPTIONS.iter().map(|z| ((*z).to_owned(), format!("Zone {z}"))).collect::<Vec<_>>());
    let available = move || state.with(|s| s.drafts.space.available().to_string());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions.spawn(|c| async move {
            c.submit_space().await;
        });
    };

    view! {
        <form class="modal-form" on:submit=on_submit>
            <SelectField
                label="Zone"
                blank="Select Zone"
                options=zones
                read=|s| s.drafts.space.zone.clone()
                write=|s, v| s.drafts.space.zone = v
            />
            <InputField
                label="Total Capacity (sq ft)"
                kind="number"
                read=|s| s.drafts.space.total_capacity.clone()
                write=|s, v| s.drafts.space.total_capacity = v
            />
            <InputField
                label="Used Capacity (sq ft)"
                kind="number"
                read=|s| s.drafts.space.used_capacity.clone()
                write=|s, v| s.drafts.space.used_capacity = v
            />
            <div class="form-group">
                <label>"Available Capacity (sq ft)"</label>
                <input type="number" readonly=true prop:value=available/>
            </div>
            <FormActions submit_label=Signal::derive(|| "Allocate Space")/>
        </form>
    }
}

#[component]
pub fn MaintenanceForm() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();
    let statuses = Signal::derive(|| labels(MaintenanceStatus::KNOWN.iter().map(MaintenanceStatus::label)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions.spawn(|c| async move {
            c.submit_maintenance().await;
        });
    };

    view! {
        <form class="modal-form" on:submit=on_submit>
            <InputField
                label="Equipment ID"
                kind="number"
                read=|s| s.drafts.maintenance.equipment_id.clone()
                write=|s, v| s.drafts.maintenance.equipment_id = v
            />
            <TextAreaField
                label="Task Description"
                read=|s| s.drafts.maintenance.description.clone()
                write=|s, v| s.drafts.maintenance.description = v
            />
            <InputField
                label="Scheduled Date"
                kind="date"
                read=|s| s.drafts.maintenance.scheduled_date.clone()
                write=|s, v| s.drafts.maintenance.scheduled_date = v
            />
            <SelectField
                label="Status"
                options=statuses
                read=|s| s.drafts.maintenance.status.clone()
                write=|s, v| s.drafts.maintenance.status = v
            />
            <FormActions submit_label=submit_label(state, "Schedule Maintenance", "Update Maintenance")/>
        </form>
    }
}
