//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the server-rendered Leptos app at `/`, its WASM/CSS bundle under
//! `/pkg`, and a health probe. The forms themselves make no requests.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Routes that do not depend on the leptos build output.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full host router: base routes + Leptos SSR + static bundle.
///
/// The bundle is served from `config.site_root` when set, otherwise from the
/// leptos site root.
///
/// # Errors
///
/// Returns [`ServerError::LeptosConfig`] if the Leptos configuration cannot
/// be loaded (missing `LEPTOS_*` environment or metadata).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = bundle_root(config, &leptos_options.site_root);
    tracing::debug!(site_root = %site_root_path.display(), "serving leptos bundle");

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

fn bundle_root(config: &ServerConfig, leptos_site_root: &str) -> PathBuf {
    config.site_root.clone().unwrap_or_else(|| PathBuf::from(leptos_site_root))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
