//! HTTP application wiring (Axum router + shared state).
//!
//! - `routes/`: page, settings and system handlers
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use erpgate_auth::{Hs256JwtValidator, JwtValidator};
use erpgate_gate::{AccessGate, GatePolicy};
use erpgate_infra::{ConfigurationCache, ConfigurationSource, InMemoryConfigurationSource};

use crate::config::AppConfig;
use crate::middleware;

pub mod errors;
pub mod routes;

pub type SharedConfigurationCache = ConfigurationCache<Arc<dyn ConfigurationSource>>;

/// Process-wide collaborators shared by middleware and handlers.
#[derive(Clone)]
pub struct AppState {
    pub jwt: Arc<dyn JwtValidator>,
    pub configs: Arc<SharedConfigurationCache>,
    pub gate: Arc<AccessGate>,
    pub session_cookie: String,
}

impl AppState {
    pub fn new(config: &AppConfig, source: Arc<dyn ConfigurationSource>) -> Self {
        let policy = GatePolicy::new().preserve_return_to(config.preserve_return_to);

        Self {
            jwt: Arc::new(Hs256JwtValidator::new(config.jwt_secret.as_bytes())),
            configs: Arc::new(ConfigurationCache::new(source).with_ttl(config.config_cache_ttl)),
            gate: Arc::new(AccessGate::new(policy)),
            session_cookie: config.session_cookie.clone(),
        }
    }
}

/// Build the full HTTP router with an in-memory configuration store.
pub fn build_app(config: &AppConfig) -> Router {
    let source: Arc<dyn ConfigurationSource> = Arc::new(InMemoryConfigurationSource::new());
    build_app_with_state(AppState::new(config, source))
}

pub fn build_app_with_state(state: AppState) -> Router {
    // API routes: bearer auth, tenant from token.
    let api = routes::api_router()
        .layer(Extension(state.clone()))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/", get(routes::pages::root))
        .nest("/api", api)
        .merge(routes::pages_router(state))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
