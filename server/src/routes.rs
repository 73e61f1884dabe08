//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only renders the Leptos shell and serves the compiled assets;
//! every chain interaction happens in the browser through the wallet bridge.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR frontend plus static assets and a health probe.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(leptos_options))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
