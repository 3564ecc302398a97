//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves the Leptos SSR shell, the hydration bundle under `/pkg`
//! and two probes. It never proxies the warehouse API: the browser calls
//! that API directly at the base URL published in the shell.

use std::path::PathBuf;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde_json::{Value, json};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// State behind the probe routes.
#[derive(Clone)]
pub struct ProbeState {
    pub api_base_url: String,
    pub http: reqwest::Client,
}

impl ProbeState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(Duration::from_secs(config.ready_timeout_secs)).build()?;
        Ok(Self { api_base_url: config.api_base_url.clone(), http })
    }
}

/// Health and readiness probes.
pub fn probe_routes(state: ProbeState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .with_state(state)
}

/// Probes + Leptos SSR + static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section) or the probe
/// client cannot be built.
pub fn app(config: &Config) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let probes = ProbeState::new(config).map_err(|e| format!("probe client: {e}"))?;

    let api_base_url = config.api_base_url.clone();
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone(), api_base_url.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(probe_routes(probes)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Ready when the warehouse API answers at all; any HTTP status counts.
async fn readyz(State(state): State<ProbeState>) -> (StatusCode, Json<Value>) {
    match state.http.get(&state.api_base_url).send().await {
        Ok(resp) => {
            let upstream = resp.status().as_u16();
            (StatusCode::OK, Json(json!({ "ready": true, "api": state.api_base_url, "upstreamStatus": upstream })))
        }
        Err(e) => {
            tracing::warn!(error = %e, api = %state.api_base_url, "warehouse api unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "ready": false, "api": state.api_base_url })))
        }
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
