use axum::{
    Router,
    routing::{get, put},
};

use crate::app::AppState;
use crate::middleware;

pub mod pages;
pub mod settings;
pub mod system;

/// Router for authenticated (tenant-scoped) JSON endpoints.
pub fn api_router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/settings/modules", get(settings::list_modules))
        .route("/settings/modules/:module", put(settings::update_module))
}

/// Localized page routes. Every match passes through the access gate.
pub fn pages_router(state: AppState) -> Router {
    Router::new()
        .route("/:locale", get(pages::render))
        .route("/:locale/*rest", get(pages::render))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::gate_middleware,
        ))
}
