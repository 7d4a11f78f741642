use erpgate_auth::{Principal, Role};
use erpgate_core::{TenantId, UserId};
use erpgate_gate::RouteContext;

/// Authenticated principal for API requests.
///
/// Inserted by the auth middleware; present on every `/api` handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal: Principal,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn user_id(&self) -> UserId {
        self.principal.user_id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.principal.tenant_id
    }

    pub fn role(&self) -> Role {
        self.principal.role
    }
}

/// Page request that the gate has allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub route: RouteContext,
    pub principal: Option<Principal>,
}
