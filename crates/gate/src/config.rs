//! Per-tenant module enablement.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use erpgate_core::ModuleKey;

/// Which modules a tenant has switched on.
///
/// Only an explicit `true` enables a module; absent keys are disabled. The
/// [`unavailable`](Self::unavailable) sentinel stands in when the real
/// configuration could not be loaded and enables only
/// [`ModuleKey::ALWAYS_ON`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessConfiguration {
    #[serde(default)]
    modules: BTreeMap<ModuleKey, bool>,

    #[serde(default, skip_serializing_if = "core::ops::Not::not")]
    unavailable: bool,
}

impl BusinessConfiguration {
    /// Empty configuration: every module disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for a tenant with no stored record yet.
    pub fn tenant_default() -> Self {
        Self::from_modules(ModuleKey::ALWAYS_ON.into_iter().map(|m| (m, true)))
    }

    /// Fail-closed stand-in for a configuration that could not be loaded.
    pub fn unavailable() -> Self {
        Self {
            modules: BTreeMap::new(),
            unavailable: true,
        }
    }

    pub fn from_modules(modules: impl IntoIterator<Item = (ModuleKey, bool)>) -> Self {
        Self {
            modules: modules.into_iter().collect(),
            unavailable: false,
        }
    }

    pub fn with_module(mut self, module: ModuleKey, enabled: bool) -> Self {
        self.set(module, enabled);
        self
    }

    pub fn set(&mut self, module: ModuleKey, enabled: bool) {
        self.modules.insert(module, enabled);
    }

    pub fn is_unavailable(&self) -> bool {
        self.unavailable
    }

    pub fn is_enabled(&self, module: ModuleKey) -> bool {
        if self.unavailable {
            return module.is_always_on();
        }
        self.modules.get(&module).copied().unwrap_or(false)
    }

    pub fn enabled_modules(&self) -> Vec<ModuleKey> {
        ModuleKey::ALL.into_iter().filter(|m| self.is_enabled(*m)).collect()
    }

    pub fn modules(&self) -> &BTreeMap<ModuleKey, bool> {
        &self.modules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_false_are_both_disabled() {
        let config = BusinessConfiguration::new()
            .with_module(ModuleKey::Inventory, true)
            .with_module(ModuleKey::Sales, false);

        assert!(config.is_enabled(ModuleKey::Inventory));
        assert!(!config.is_enabled(ModuleKey::Sales));
        assert!(!config.is_enabled(ModuleKey::Finance));
    }

    #[test]
    fn sentinel_enables_only_always_on() {
        let config = BusinessConfiguration::unavailable().with_module(ModuleKey::Finance, true);
        assert!(config.is_unavailable());
        assert_eq!(config.enabled_modules(), vec![ModuleKey::Settings]);
    }

    #[test]
    fn tenant_default_enables_settings() {
        assert_eq!(
            BusinessConfiguration::tenant_default().enabled_modules(),
            vec![ModuleKey::Settings]
        );
    }

    #[test]
    fn json_shape_uses_module_codes() {
        let config = BusinessConfiguration::new().with_module(ModuleKey::Hr, true);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json, serde_json::json!({ "modules": { "hr": true } }));

        let parsed: BusinessConfiguration =
            serde_json::from_value(serde_json::json!({ "modules": { "sales": true } })).unwrap();
        assert!(parsed.is_enabled(ModuleKey::Sales));
        assert!(!parsed.is_unavailable());
    }
}
