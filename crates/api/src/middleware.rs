use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;

use erpgate_auth::{Principal, SessionError, resolve_session};
use erpgate_core::Locale;
use erpgate_gate::{AccessDecision, BusinessConfiguration, Denial, Fallback, Notice};

use crate::app::{AppState, errors};
use crate::context::{PageContext, PrincipalContext};

/// Bearer-token authentication for the JSON API.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = extract_bearer(req.headers());
    let principal = match resolve_session(state.jwt.as_ref(), token, Utc::now()) {
        Ok(principal) => principal,
        Err(e) => {
            tracing::debug!(error = %e, "api request rejected");
            return errors::json_error(StatusCode::UNAUTHORIZED, "unauthorized", e.to_string());
        }
    };

    req.extensions_mut().insert(PrincipalContext::new(principal));
    next.run(req).await
}

/// Access gate for localized page routes.
///
/// Resolves route, session and tenant configuration, asks the gate, and acts
/// on the decision. Only `Allow` reaches the page handler.
pub async fn gate_middleware(
    State(state): State<AppState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let route = match state.gate.resolve(req.uri().path()) {
        Ok(route) => route,
        Err(e) => {
            tracing::error!(error = %e, "page path missing from routing table");
            return errors::json_error(StatusCode::NOT_FOUND, "not_found", "page not found");
        }
    };

    let principal = page_principal(&state, req.headers());

    // Anonymous requests never reach the module check, so they skip the load.
    let config = match &principal {
        Some(p) => state.configs.load_or_unavailable(p.tenant_id).await,
        None => BusinessConfiguration::unavailable(),
    };

    let decision = state.gate.decide(&route, principal.as_ref(), &config);
    match &decision {
        AccessDecision::Allow => {
            req.extensions_mut().insert(PageContext { route, principal });
            next.run(req).await
        }
        AccessDecision::RedirectToLogin { .. } | AccessDecision::RedirectToHome { .. } => {
            match state.gate.location(&decision) {
                Some(location) => Redirect::temporary(&location).into_response(),
                None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            }
        }
        AccessDecision::Deny(denial) => deny_response(route.locale, denial),
    }
}

fn page_principal(state: &AppState, headers: &HeaderMap) -> Option<Principal> {
    let token = extract_bearer(headers).or_else(|| extract_cookie(headers, &state.session_cookie));

    match resolve_session(state.jwt.as_ref(), token, Utc::now()) {
        Ok(principal) => Some(principal),
        Err(SessionError::Missing) => None,
        Err(e) => {
            tracing::warn!(error = %e, "invalid session treated as anonymous");
            None
        }
    }
}

fn deny_response(locale: Locale, denial: &Denial) -> Response {
    let body = match &denial.fallback {
        Fallback::Replacement(view) => serde_json::json!({
            "error": "access_denied",
            "reason": denial.reason,
            "module": denial.module,
            "replacement": view,
        }),
        Fallback::ModuleUnavailable => serde_json::json!({
            "error": "access_denied",
            "reason": denial.reason,
            "module": denial.module,
            "notice": Notice::for_denial(locale, denial),
        }),
    };

    (StatusCode::FORBIDDEN, axum::Json(body)).into_response()
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let token = headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();

    (!token.is_empty()).then_some(token)
}

fn extract_cookie<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
}
