use core::str::FromStr;

use serde::{Deserialize, Serialize};

use erpgate_core::DomainError;

/// Role assigned to a principal within its tenant.
///
/// The set is closed: a token naming any other role does not produce a
/// principal at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Accountant,
    Salesperson,
    Warehouse,
    Staff,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::Manager,
        Role::Accountant,
        Role::Salesperson,
        Role::Warehouse,
        Role::Staff,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Accountant => "accountant",
            Role::Salesperson => "salesperson",
            Role::Warehouse => "warehouse",
            Role::Staff => "staff",
        }
    }

    /// Whether this role may enable/disable modules for its tenant.
    pub fn can_manage_settings(self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DomainError::unknown_role(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admin_and_manager_manage_settings() {
        let managers: Vec<_> = Role::ALL.into_iter().filter(|r| r.can_manage_settings()).collect();
        assert_eq!(managers, vec![Role::Admin, Role::Manager]);
    }

    #[test]
    fn parse_rejects_unknown_roles() {
        assert_eq!("staff".parse::<Role>().unwrap(), Role::Staff);
        assert!("root".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
    }
}
