//! Route classification: request path → [`RouteContext`].
//!
//! The route-to-module mapping is static data owned by the caller. The gate
//! only consumes the resulting context.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use erpgate_core::{Locale, ModuleKey};

/// Locale-stripped path of the login page.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// What a route points at, as far as access control is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "module", rename_all = "snake_case")]
pub enum RouteTarget {
    Login,
    /// Dashboard/home: authentication required, no module.
    Home,
    Module(ModuleKey),
    /// The routing table maps the path to a key outside [`ModuleKey`].
    UnknownModule(String),
}

/// Caller-supplied replacement view shown instead of the generic notice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FallbackView(String);

impl FallbackView {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Per-request route information handed to the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteContext {
    pub locale: Locale,
    /// Locale-stripped, normalized path (`"/"` for home).
    pub path: String,
    pub target: RouteTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackView>,
}

impl RouteContext {
    pub fn new(locale: Locale, path: impl Into<String>, target: RouteTarget) -> Self {
        Self {
            locale,
            path: path.into(),
            target,
            fallback: None,
        }
    }

    pub fn login(locale: Locale) -> Self {
        Self::new(locale, DEFAULT_LOGIN_PATH, RouteTarget::Login)
    }

    pub fn home(locale: Locale) -> Self {
        Self::new(locale, "/", RouteTarget::Home)
    }

    pub fn module(locale: Locale, path: impl Into<String>, module: ModuleKey) -> Self {
        Self::new(locale, path, RouteTarget::Module(module))
    }

    pub fn with_fallback(mut self, fallback: FallbackView) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn module_key(&self) -> Option<ModuleKey> {
        match self.target {
            RouteTarget::Module(m) => Some(m),
            _ => None,
        }
    }
}

/// Routing-table defects. These indicate a bug in the table, not a user
/// condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no module mapping for path '{path}'")]
    Unmapped { locale: Locale, path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RouteEntry {
    module: String,
    fallback: Option<FallbackView>,
}

/// Static mapping from the first path segment to a module key.
///
/// Module keys are stored as strings so a table can (mistakenly or during a
/// rollout) point at a module this build does not know; such routes classify
/// as [`RouteTarget::UnknownModule`] and are denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    login_path: String,
    entries: HashMap<String, RouteEntry>,
}

impl RouteTable {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            entries: HashMap::new(),
        }
    }

    /// Every module under its own key, plus the legacy section aliases.
    pub fn standard() -> Self {
        let table = ModuleKey::ALL
            .into_iter()
            .fold(Self::new(DEFAULT_LOGIN_PATH), |t, m| t.map(m.as_str(), m.as_str()));

        table
            .map("payroll", ModuleKey::Hr.as_str())
            .map("crm", ModuleKey::Sales.as_str())
            .map("tickets", ModuleKey::Service.as_str())
    }

    pub fn map(mut self, segment: impl Into<String>, module: impl Into<String>) -> Self {
        self.entries.insert(
            segment.into(),
            RouteEntry {
                module: module.into(),
                fallback: None,
            },
        );
        self
    }

    pub fn map_with_fallback(
        mut self,
        segment: impl Into<String>,
        module: impl Into<String>,
        fallback: FallbackView,
    ) -> Self {
        self.entries.insert(
            segment.into(),
            RouteEntry {
                module: module.into(),
                fallback: Some(fallback),
            },
        );
        self
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Classify a raw request path.
    pub fn resolve(&self, raw_path: &str) -> Result<RouteContext, RouteError> {
        let (locale, path) = Locale::split_path(raw_path);

        if path == self.login_path {
            return Ok(RouteContext::new(locale, path, RouteTarget::Login));
        }

        let Some(first) = path.split('/').find(|s| !s.is_empty()) else {
            return Ok(RouteContext::new(locale, path, RouteTarget::Home));
        };

        let Some(entry) = self.entries.get(first) else {
            return Err(RouteError::Unmapped { locale, path });
        };

        let target = match entry.module.parse::<ModuleKey>() {
            Ok(module) => RouteTarget::Module(module),
            Err(_) => RouteTarget::UnknownModule(entry.module.clone()),
        };

        Ok(RouteContext {
            locale,
            path,
            target,
            fallback: entry.fallback.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_module_routes() {
        let table = RouteTable::standard();
        let route = table.resolve("/ru/inventory/reception").unwrap();

        assert_eq!(route.locale, Locale::Ru);
        assert_eq!(route.path, "/inventory/reception");
        assert_eq!(route.target, RouteTarget::Module(ModuleKey::Inventory));
    }

    #[test]
    fn resolves_aliases() {
        let table = RouteTable::standard();
        assert_eq!(
            table.resolve("/en/crm/leads").unwrap().module_key(),
            Some(ModuleKey::Sales)
        );
        assert_eq!(
            table.resolve("/tr/payroll").unwrap().module_key(),
            Some(ModuleKey::Hr)
        );
    }

    #[test]
    fn login_is_compared_after_stripping_locale() {
        let table = RouteTable::standard();
        let route = table.resolve("/en/login").unwrap();
        assert_eq!(route.target, RouteTarget::Login);
        assert_eq!(route.locale, Locale::En);

        assert_eq!(table.resolve("/login").unwrap().target, RouteTarget::Login);
        assert!(
            table
                .resolve("/en/login/help")
                .map_or(true, |r| r.target != RouteTarget::Login)
        );
    }

    #[test]
    fn locale_root_is_home() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve("/uz").unwrap(), RouteContext::home(Locale::Uz));
        assert_eq!(table.resolve("/").unwrap(), RouteContext::home(Locale::Ru));
    }

    #[test]
    fn missing_locale_uses_default() {
        let table = RouteTable::standard();
        let route = table.resolve("/sales/leads").unwrap();
        assert_eq!(route.locale, Locale::Ru);
        assert_eq!(route.module_key(), Some(ModuleKey::Sales));
    }

    #[test]
    fn unmapped_segment_is_a_table_defect() {
        let table = RouteTable::standard();
        assert_eq!(
            table.resolve("/en/reports/q3"),
            Err(RouteError::Unmapped {
                locale: Locale::En,
                path: "/reports/q3".to_string(),
            })
        );
    }

    #[test]
    fn unknown_module_key_and_fallback_are_carried() {
        let table = RouteTable::standard()
            .map("fleet", "fleet")
            .map_with_fallback("pos", "sales", FallbackView::new("pos-upsell"));

        assert_eq!(
            table.resolve("/ru/fleet").unwrap().target,
            RouteTarget::UnknownModule("fleet".to_string())
        );

        let pos = table.resolve("/ru/pos/terminal").unwrap();
        assert_eq!(pos.module_key(), Some(ModuleKey::Sales));
        assert_eq!(pos.fallback, Some(FallbackView::new("pos-upsell")));
    }
}
