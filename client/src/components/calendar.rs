//! Month calendar marking days with pending maintenance.

use leptos::prelude::*;

use crate::app::Actions;
use crate::state::dashboard::DashboardState;
use crate::util::{calendar, clock};

#[component]
pub fn MaintenanceCalendar() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();
    let grid = Memo::new(move |_| {
        state.with(|s| {
            let today = s.today.unwrap_or_else(clock::today);
            let pending = calendar::pending_maintenance_dates(s.maintenance.items());
            calendar::build_grid(s.ui.calendar_month, today, &pending)
        })
    });

    view! {
        <div class="calendar">
            <div class="calendar-header">
                <button class="btn-icon" title="Previous month" on:click=move |_| actions.run(|c| c.change_month(-1))>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <h3 class="calendar-title">{move || grid.with(|g| g.label.clone())}</h3>
                <button class="btn-icon" title="Next month" on:click=move |_| actions.run(|c| c.change_month(1))>
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
            <div class="calendar-grid">
                {calendar::WEEKDAY_HEADERS
                    .iter()
                    .map(|d| view! { <div class="calendar-day-header">{*d}</div> })
                    .collect_view()}
                {move || {
                    grid.get()
                        .cells
                        .into_iter()
                        .map(|cell| {
                            let title = cell.has_maintenance.then_some("Pending maintenance");
                            view! {
                                <div class=cell.class() title=title attr:data-date=clock::iso_date(cell.date)>
                                    {cell.date.day().to_string()}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
