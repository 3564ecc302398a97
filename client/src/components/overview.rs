//! Dashboard section: summary tiles, quick stats and recent activity.

use leptos::prelude::*;

use crate::render::summary::{self, Tile};
use crate::state::dashboard::DashboardState;
use crate::util::clock;

#[component]
pub fn Overview() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let tiles = Memo::new(move |_| state.with(|s| summary::summary_tiles(&s.summary)));
    let stats = Memo::new(move |_| {
        state.with(|s| summary::quick_stats(&s.summary, s.today.unwrap_or_else(clock::today)))
    });
    let activity = Memo::new(move |_| state.with(|s| summary::activity(&s.summary, clock::now_millis())));

    view! {
        <section class="content-section dashboard-section">
            <div class="summary-grid">
                {move || tiles.get().into_iter().map(|tile| view! { <SummaryTile tile/> }).collect_view()}
            </div>
            <div class="dashboard-columns">
                <div class="card recent-activity">
                    <h3>"Recent Activity"</h3>
                    <ul class="activity-list">
                        {move || match activity.get() {
                            Ok(entries) => {
                                entries
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <li class="activity-item">
                                                <i class=format!("fas fa-{}", entry.icon)></i>
                                                <span class="activity-text">{entry.text}</span>
                                                <span class="activity-time">{entry.time}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                            Err(p) => view! { <li class=p.kind.class()>{p.message}</li> }.into_any(),
                        }}
                    </ul>
                </div>
                <div class="card quick-stats">
                    <h3>"Quick Stats"</h3>
                    <div class="stats-grid">
                        {move || {
                            stats
                                .get()
                                .into_iter()
                                .map(|stat| {
                                    view! {
                                        <div class="stat-item">
                                            <span class="stat-value">{stat.value}</span>
                                            <span class="stat-label">{stat.label}</span>
                                            <span class="stat-caption">{stat.caption}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SummaryTile(tile: Tile) -> impl IntoView {
    view! {
        <div class="summary-card">
            <div class="summary-icon">
                <i class=format!("fas fa-{}", tile.icon)></i>
            </div>
            <div class="summary-info">
                <h3>{tile.label}</h3>
                <p class="summary-value">{tile.value}</p>
                <span class="summary-caption">{tile.caption}</span>
            </div>
        </div>
    }
}
