//! Sidebar navigation and theme toggle.

use leptos::prelude::*;

use crate::app::Actions;
use crate::state::dashboard::DashboardState;
use crate::state::ui::Section;
use crate::util::theme::Theme;

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();
    let current = Memo::new(move |_| state.with(|s| s.ui.section));
    let collapsed = Memo::new(move |_| state.with(|s| s.ui.sidebar_collapsed));
    let dark = Memo::new(move |_| state.with(|s| s.ui.theme == Theme::Dark));

    view! {
        <nav class="sidebar" class:collapsed=move || collapsed.get()>
            <div class="sidebar-header">
                <h1 class="logo">"LWMS"</h1>
                <button
                    class="btn-icon sidebar-toggle"
                    title="Toggle sidebar"
                    on:click=move |_| state.update(|s| s.ui.sidebar_collapsed = !s.ui.sidebar_collapsed)
                >
                    <i class="fas fa-bars"></i>
                </button>
            </div>
            <ul class="nav-menu">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li
                                class="nav-item"
                                class:active=move || current.get() == section
                                on:click=move |_| {
                                    actions.spawn(move |c| async move {
                                        c.switch_section(section).await;
                                    });
                                }
                            >
                                <i class=format!("fas fa-{}", section.icon())></i>
                                <span>{section.label()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="sidebar-footer">
                <button class="btn theme-toggle" title="Toggle dark mode" on:click=move |_| actions.run(|c| c.toggle_theme())>
                    <i class=move || if dark.get() { "fas fa-sun" } else { "fas fa-moon" }></i>
                    {move || if dark.get() { " Light Mode" } else { " Dark Mode" }}
                </button>
            </div>
        </nav>
    }
}
