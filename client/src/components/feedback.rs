//! Toast stack and global loading overlay.

use leptos::prelude::*;

use crate::app::Actions;
use crate::state::dashboard::DashboardState;
use crate::state::notify::Toast;

/// Stack of visible toasts, newest last.
#[component]
pub fn ToastStack() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let toasts = Memo::new(move |_| state.with(|s| s.notices.toasts.clone()));

    view! {
        <div class="toast-container">
            <For each=move || toasts.get() key=|toast| toast.id let:toast>
                <ToastView toast/>
            </For>
        </div>
    }
}

/// One toast. Dismisses itself after `TOAST_LIFETIME_MS`.
#[component]
fn ToastView(toast: Toast) -> impl IntoView {
    let actions = expect_context::<Actions>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::notify::TOAST_LIFETIME_MS).await;
            actions.run(|c| c.dismiss_toast(id));
        });
    }

    view! {
        <div class=format!("toast {}", toast.kind.class())>
            <i class=format!("fas fa-{}", toast.kind.icon())></i>
            <span class="toast-message">{toast.message}</span>
            <button class="toast-close" title="Dismiss" on:click=move |_| actions.run(|c| c.dismiss_toast(id))>
                "×"
            </button>
        </div>
    }
}

/// Full-screen spinner shown while any tracked operation is in flight.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let visible = Memo::new(move |_| state.with(|s| s.loading.is_visible()));

    view! {
        <Show when=move || visible.get()>
            <div class="loading-overlay">
                <div class="spinner"></div>
            </div>
        </Show>
    }
}
