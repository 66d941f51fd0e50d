//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every client route is server-rendered through `leptos_routes`; the hydrate
//! bundle is served from the site root's `pkg` directory. There are no API
//! routes here: the browser calls the buddy matching backend directly.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router: health check, SSR pages and static assets.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "registered leptos routes");
    let pkg = pkg_dir(leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

/// Directory holding the hydrate bundle under the Leptos site root.
fn pkg_dir(site_root: &str) -> PathBuf {
    Path::new(site_root).join("pkg")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
