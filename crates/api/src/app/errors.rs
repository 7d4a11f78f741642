use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use erpgate_infra::ConfigurationError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn configuration_error_to_response(err: ConfigurationError) -> axum::response::Response {
    match err {
        ConfigurationError::Unavailable(msg) => {
            json_error(StatusCode::SERVICE_UNAVAILABLE, "configuration_unavailable", msg)
        }
    }
}
