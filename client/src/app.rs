//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders `shell` on the server and the browser hydrates `App`.
//! `App` owns the one `DashboardState` signal and the controller that
//! mutates it; both are handed to the tree through context.

use std::future::Future;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::controller::Controller;
use crate::net::api::{API_BASE_META, ApiClient, ApiConfig};
use crate::net::transport::BrowserTransport;
use crate::pages::dashboard::DashboardPage;
use crate::state::dashboard::DashboardState;
use crate::util::clock;

/// Controller bound to the browser transport and the app's state signal.
pub type AppController = Controller<BrowserTransport, RwSignal<DashboardState>>;

/// Context handle for dispatching controller actions from event handlers.
#[derive(Clone, Copy)]
pub struct Actions(StoredValue<AppController>);

impl Actions {
    pub fn new(controller: AppController) -> Self {
        Self(StoredValue::new(controller))
    }

    /// Run a synchronous action.
    pub fn run(self, f: impl FnOnce(&AppController)) {
        let _ = self.0.try_with_value(f);
    }

    /// Spawn an async action on the browser task queue.
    pub fn spawn<F, Fut>(self, f: F)
    where
        F: FnOnce(AppController) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            if let Some(controller) = self.0.try_get_value() {
                leptos::task::spawn_local(f(controller));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = f;
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base_url` is published as a `<meta>` tag so the browser knows where
/// the warehouse API lives.
pub fn shell(options: LeptosOptions, api_base_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="light-mode">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(DashboardState::new(clock::today()));
    let api = ApiClient::new(ApiConfig::from_document(), BrowserTransport);
    provide_context(state);
    provide_context(Actions::new(Controller::new(api, state)));

    view! {
        <Stylesheet id="leptos" href="/pkg/lwms.css"/>
        <Title text="LWMS Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
