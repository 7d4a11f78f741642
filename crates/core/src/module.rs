//! Top-level functional areas of the ERP.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Module key (enumerated set).
///
/// Anything a route table maps outside this set is an *unknown* module and is
/// never treated as available.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKey {
    Finance,
    Hr,
    Inventory,
    Purchasing,
    Sales,
    Service,
    Settings,
}

impl ModuleKey {
    pub const ALL: [ModuleKey; 7] = [
        ModuleKey::Finance,
        ModuleKey::Hr,
        ModuleKey::Inventory,
        ModuleKey::Purchasing,
        ModuleKey::Sales,
        ModuleKey::Service,
        ModuleKey::Settings,
    ];

    /// Modules that stay reachable when tenant configuration cannot be loaded.
    pub const ALWAYS_ON: [ModuleKey; 1] = [ModuleKey::Settings];

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKey::Finance => "finance",
            ModuleKey::Hr => "hr",
            ModuleKey::Inventory => "inventory",
            ModuleKey::Purchasing => "purchasing",
            ModuleKey::Sales => "sales",
            ModuleKey::Service => "service",
            ModuleKey::Settings => "settings",
        }
    }

    pub fn is_always_on(self) -> bool {
        Self::ALWAYS_ON.contains(&self)
    }
}

impl core::fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| DomainError::unknown_module(s))
    }
}
