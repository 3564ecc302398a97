//! Maintenance section: task list beside the calendar.

use leptos::prelude::*;

use crate::app::Actions;
use crate::components::calendar::MaintenanceCalendar;
use crate::render::Entry;
use crate::render::maintenance::{self, TaskCard};
use crate::state::dashboard::DashboardState;
use crate::state::modal::{FormMode, ModalKind};

#[component]
pub fn MaintenancePanel() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();
    let cards = Memo::new(move |_| state.with(|s| maintenance::cards(&s.maintenance.load)));

    let on_schedule = move |_| {
        actions.spawn(|c| async move {
            c.open_modal(ModalKind::Maintenance, FormMode::Create).await;
        });
    };

    view! {
        <section class="content-section maintenance-section">
            <div class="section-header">
                <h2>"Maintenance Schedule"</h2>
                <div class="section-actions">
                    <button class="btn btn-primary" on:click=on_schedule>
                        <i class="fas fa-plus"></i>
                        " Schedule Maintenance"
                    </button>
                </div>
            </div>
            <div class="maintenance-layout">
                <div class="maintenance-list">
                    {move || {
                        cards
                            .get()
                            .into_iter()
                            .map(|entry| match entry {
                                Entry::Item(card) => view! { <TaskCardView card/> }.into_any(),
                                Entry::Placeholder(p) => {
                                    view! { <div class=format!("maintenance-item {}", p.kind.class())>{p.message}</div> }
                                        .into_any()
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <MaintenanceCalendar/>
            </div>
        </section>
    }
}

#[component]
fn TaskCardView(card: TaskCard) -> impl IntoView {
    let actions = expect_context::<Actions>();
    let id = card.key;
    let on_edit = move |_| {
        actions.spawn(move |c| async move {
            c.open_modal(ModalKind::Maintenance, FormMode::Edit(id)).await;
        });
    };

    view! {
        <div class="maintenance-item" attr:data-id=id>
            <div class="maintenance-info">
                <h4>{card.heading}</h4>
                <p>{card.description}</p>
                <span class="maintenance-date">
                    <i class="fas fa-calendar"></i>
                    " "
                    {card.date}
                </span>
            </div>
            <div class="maintenance-actions">
                <span class=card.badge.class>{card.badge.label}</span>
                <button class="btn-icon edit" title="Edit" on:click=on_edit>
                    <i class="fas fa-edit"></i>
                </button>
            </div>
        </div>
    }
}
