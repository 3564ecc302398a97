//! Space management section: one card per zone allocation.

use leptos::prelude::*;

use crate::app::Actions;
use crate::render::space::{self, SpaceCard};
use crate::render::Entry;
use crate::state::dashboard::DashboardState;
use crate::state::modal::{DeleteTarget, FormMode, ModalKind};

#[component]
pub fn SpacePanel() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();
    let cards = Memo::new(move |_| state.with(|s| space::cards(&s.spaces.load)));

    let on_allocate = move |_| {
        actions.spawn(|c| async move {
            c.open_modal(ModalKind::Space, FormMode::Create).await;
        });
    };

    view! {
        <section class="content-section space-section">
            <div class="section-header">
                <h2>"Space Management"</h2>
                <div class="section-actions">
                    <button class="btn btn-primary" on:click=on_allocate>
                        <i class="fas fa-plus"></i>
                        " Allocate Space"
                    </button>
                </div>
            </div>
            <div class="space-grid">
                {move || {
                    cards
                        .get()
                        .into_iter()
                        .map(|entry| match entry {
                            Entry::Item(card) => view! { <SpaceCardView card/> }.into_any(),
                            Entry::Placeholder(p) => {
                                view! { <div class=format!("space-card {}", p.kind.class())>{p.message}</div> }
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn SpaceCardView(card: SpaceCard) -> impl IntoView {
    let actions = expect_context::<Actions>();
    let id = card.key;

    view! {
        <div class="space-card" attr:data-id=id>
            <div class="space-header">
                <h3>{card.title}</h3>
                <button
                    class="btn-icon delete"
                    title="Free space"
                    on:click=move |_| actions.run(|c| c.request_delete(DeleteTarget::Space { id }))
                >
                    <i class="fas fa-trash"></i>
                </button>
            </div>
            <div class="space-stats">
                <div class="stat">
                    <span class="stat-label">"Total:"</span>
                    <span class="stat-value">{card.total}</span>
                </div>
                <div class="stat">
                    <span class="stat-label">"Used:"</span>
                    <span class="stat-value">{card.used}</span>
                </div>
                <div class="stat">
                    <span class="stat-label">"Available:"</span>
                    <span class="stat-value">{card.available}</span>
                </div>
            </div>
            <div class="progress-bar">
                <div class="progress-fill" style:width=format!("{}%", card.bar_width)></div>
            </div>
            <div class="utilization-text">{card.percent_label}</div>
        </div>
    }
}
