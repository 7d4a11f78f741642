use serde::{Deserialize, Serialize};

use erpgate_core::{TenantId, UserId};

use crate::Role;

/// The authenticated actor making a request.
///
/// Built once per request from validated session claims and never mutated
/// afterwards. A principal always carries a role; sessions without one are
/// rejected during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: UserId,
    pub tenant_id: TenantId,
    pub role: Role,
}

impl Principal {
    pub fn new(user_id: UserId, tenant_id: TenantId, role: Role) -> Self {
        Self {
            user_id,
            tenant_id,
            role,
        }
    }
}
