//! Page descriptors for gate-approved requests.
//!
//! Rendering proper lives in the front end; the server answers with what to
//! render and for whom.

use axum::{Extension, Json, response::IntoResponse, response::Redirect};
use serde_json::json;

use erpgate_core::Locale;
use erpgate_gate::RouteTarget;

use crate::context::PageContext;

pub async fn root() -> Redirect {
    Redirect::temporary(&Locale::DEFAULT.localize("/"))
}

pub async fn render(Extension(page): Extension<PageContext>) -> impl IntoResponse {
    let view = match &page.route.target {
        RouteTarget::Login => "login",
        RouteTarget::Home => "home",
        RouteTarget::Module(_) | RouteTarget::UnknownModule(_) => "module",
    };

    Json(json!({
        "view": view,
        "locale": page.route.locale,
        "path": page.route.path,
        "module": page.route.module_key(),
        "role": page.principal.as_ref().map(|p| p.role),
    }))
}
