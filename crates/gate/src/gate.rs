//! The access gate.
//!
//! Evaluation runs in a fixed order, once per request:
//! authentication → module enablement → role restriction. The first stage
//! that produces an outcome ends evaluation.

use std::collections::{BTreeMap, BTreeSet};

use erpgate_auth::{Principal, Role};
use erpgate_core::ModuleKey;

use crate::config::BusinessConfiguration;
use crate::decision::{AccessDecision, Denial, DenyReason, Fallback};
use crate::route::{RouteContext, RouteError, RouteTable, RouteTarget};

/// Static policy knobs. Identical for every request served by a process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatePolicy {
    /// Carry the originally requested path on login redirects.
    pub preserve_return_to: bool,
    role_restrictions: BTreeMap<ModuleKey, BTreeSet<Role>>,
}

impl GatePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preserve_return_to(mut self, preserve: bool) -> Self {
        self.preserve_return_to = preserve;
        self
    }

    /// Limit a module to the given roles. Unrestricted modules admit any role.
    pub fn restrict(mut self, module: ModuleKey, roles: impl IntoIterator<Item = Role>) -> Self {
        self.role_restrictions
            .entry(module)
            .or_default()
            .extend(roles);
        self
    }

    pub fn allowed_roles(&self, module: ModuleKey) -> Option<&BTreeSet<Role>> {
        self.role_restrictions.get(&module)
    }

    pub fn permits(&self, role: Role, module: ModuleKey) -> bool {
        self.allowed_roles(module).is_none_or(|roles| roles.contains(&role))
    }
}

/// Pure decision function over (route, principal, configuration).
///
/// Owns the route table it classifies paths with, so login redirects always
/// point at a path that table maps to the login route. Holds no mutable
/// state; share freely across requests and threads.
#[derive(Debug, Clone)]
pub struct AccessGate {
    policy: GatePolicy,
    routes: RouteTable,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(GatePolicy::default())
    }
}

impl AccessGate {
    /// Gate over [`RouteTable::standard`].
    pub fn new(policy: GatePolicy) -> Self {
        Self {
            policy,
            routes: RouteTable::standard(),
        }
    }

    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Classify a raw request path with this gate's route table.
    pub fn resolve(&self, raw_path: &str) -> Result<RouteContext, RouteError> {
        self.routes.resolve(raw_path)
    }

    /// Redirect target for a decision, `None` unless it redirects.
    pub fn location(&self, decision: &AccessDecision) -> Option<String> {
        decision.location(self.routes.login_path())
    }

    /// Decide what to do with a request.
    ///
    /// `principal` is `None` for anonymous requests *and* for sessions that
    /// failed to resolve. `config` must be fully loaded, or the
    /// [`BusinessConfiguration::unavailable`] sentinel.
    pub fn decide(
        &self,
        route: &RouteContext,
        principal: Option<&Principal>,
        config: &BusinessConfiguration,
    ) -> AccessDecision {
        let decision = match self.check_auth(route, principal) {
            Ok(principal) => self.check_module(route, principal, config),
            Err(decision) => decision,
        };

        tracing::debug!(
            locale = %route.locale,
            path = %route.path,
            authenticated = principal.is_some(),
            config_unavailable = config.is_unavailable(),
            decision = decision.kind(),
            "access decided"
        );
        decision
    }

    fn check_auth<'p>(
        &self,
        route: &RouteContext,
        principal: Option<&'p Principal>,
    ) -> Result<&'p Principal, AccessDecision> {
        match (&route.target, principal) {
            (RouteTarget::Login, None) => Err(AccessDecision::Allow),
            (RouteTarget::Login, Some(_)) => Err(AccessDecision::RedirectToHome {
                locale: route.locale,
            }),
            (_, None) => Err(AccessDecision::RedirectToLogin {
                locale: route.locale,
                return_to: self.policy.preserve_return_to.then(|| route.path.clone()),
            }),
            (_, Some(principal)) => Ok(principal),
        }
    }

    fn check_module(
        &self,
        route: &RouteContext,
        principal: &Principal,
        config: &BusinessConfiguration,
    ) -> AccessDecision {
        let module = match &route.target {
            RouteTarget::Module(module) => *module,
            RouteTarget::UnknownModule(raw) => {
                return AccessDecision::Deny(Denial {
                    reason: DenyReason::UnknownModule,
                    module: Some(raw.clone()),
                    fallback: Fallback::ModuleUnavailable,
                });
            }
            RouteTarget::Home | RouteTarget::Login => return AccessDecision::Allow,
        };

        if !config.is_enabled(module) {
            let reason = if config.is_unavailable() {
                DenyReason::ConfigurationUnavailable
            } else {
                DenyReason::ModuleDisabled
            };
            return deny(route, reason, Some(module.as_str().to_string()));
        }

        if !self.policy.permits(principal.role, module) {
            return deny(
                route,
                DenyReason::RoleNotPermitted,
                Some(module.as_str().to_string()),
            );
        }

        AccessDecision::Allow
    }
}

fn deny(route: &RouteContext, reason: DenyReason, module: Option<String>) -> AccessDecision {
    AccessDecision::Deny(Denial {
        reason,
        module,
        fallback: Fallback::from(route.fallback.clone()),
    })
}

/// [`AccessGate::decide`] under the default policy.
pub fn decide(
    route: &RouteContext,
    principal: Option<&Principal>,
    config: &BusinessConfiguration,
) -> AccessDecision {
    AccessGate::default().decide(route, principal, config)
}
