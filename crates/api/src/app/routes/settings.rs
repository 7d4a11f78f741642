//! Tenant module settings.
//!
//! Writes go through the configuration cache so the tenant's entry is
//! invalidated and the next page request sees the change.

use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use erpgate_core::{ModuleKey, TenantId};
use erpgate_gate::BusinessConfiguration;

use crate::app::{AppState, errors};
use crate::context::PrincipalContext;

#[derive(Debug, Deserialize)]
pub struct UpdateModuleRequest {
    pub enabled: bool,
}

/// GET /api/settings/modules
pub async fn list_modules(
    Extension(state): Extension<AppState>,
    Extension(principal): Extension<PrincipalContext>,
) -> Response {
    match state.configs.load(principal.tenant_id()).await {
        Ok(config) => configuration_body(principal.tenant_id(), &config).into_response(),
        Err(e) => errors::configuration_error_to_response(e),
    }
}

/// PUT /api/settings/modules/:module
pub async fn update_module(
    Extension(state): Extension<AppState>,
    Extension(principal): Extension<PrincipalContext>,
    Path(module): Path<String>,
    Json(req): Json<UpdateModuleRequest>,
) -> Response {
    let module = match module.parse::<ModuleKey>() {
        Ok(m) => m,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "unknown_module", e.to_string()),
    };

    if !principal.role().can_manage_settings() {
        return errors::json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            format!("role '{}' cannot change module settings", principal.role()),
        );
    }

    match state
        .configs
        .update_module(principal.tenant_id(), module, req.enabled)
        .await
    {
        Ok(config) => configuration_body(principal.tenant_id(), &config).into_response(),
        Err(e) => errors::configuration_error_to_response(e),
    }
}

fn configuration_body(tenant_id: TenantId, config: &BusinessConfiguration) -> Json<serde_json::Value> {
    Json(json!({
        "tenant_id": tenant_id.to_string(),
        "modules": config.modules(),
        "enabled_modules": config.enabled_modules(),
    }))
}
