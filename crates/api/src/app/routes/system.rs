use axum::{Extension, Json, http::StatusCode, response::IntoResponse};

use crate::context::PrincipalContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(principal): Extension<PrincipalContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "tenant_id": principal.tenant_id().to_string(),
        "user_id": principal.user_id().to_string(),
        "role": principal.role(),
    }))
}
