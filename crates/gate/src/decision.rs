//! Access decision values.

use serde::Serialize;

use erpgate_core::Locale;

use crate::route::FallbackView;

/// Outcome of evaluating one request. Computed fresh per request and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AccessDecision {
    Allow,
    RedirectToLogin {
        locale: Locale,
        /// Locale-stripped path to come back to after login (only when the
        /// policy preserves it).
        #[serde(skip_serializing_if = "Option::is_none")]
        return_to: Option<String>,
    },
    RedirectToHome {
        locale: Locale,
    },
    Deny(Denial),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    ModuleDisabled,
    ConfigurationUnavailable,
    UnknownModule,
    RoleNotPermitted,
}

/// What to show in place of the protected view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "view", rename_all = "snake_case")]
pub enum Fallback {
    Replacement(FallbackView),
    ModuleUnavailable,
}

impl From<Option<FallbackView>> for Fallback {
    fn from(view: Option<FallbackView>) -> Self {
        view.map(Fallback::Replacement).unwrap_or(Fallback::ModuleUnavailable)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Denial {
    pub reason: DenyReason,
    /// Module key as the route table named it (may be outside the known set).
    pub module: Option<String>,
    pub fallback: Fallback,
}

impl AccessDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }

    pub fn is_redirect(&self) -> bool {
        matches!(
            self,
            AccessDecision::RedirectToLogin { .. } | AccessDecision::RedirectToHome { .. }
        )
    }

    pub fn denial(&self) -> Option<&Denial> {
        match self {
            AccessDecision::Deny(d) => Some(d),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AccessDecision::Allow => "allow",
            AccessDecision::RedirectToLogin { .. } => "redirect_to_login",
            AccessDecision::RedirectToHome { .. } => "redirect_to_home",
            AccessDecision::Deny(_) => "deny",
        }
    }

    /// Redirect target for redirect decisions, `None` otherwise.
    /// `login_path` is the locale-stripped login route.
    pub fn location(&self, login_path: &str) -> Option<String> {
        match self {
            AccessDecision::RedirectToLogin { locale, return_to } => {
                let login = locale.localize(login_path);
                Some(match return_to {
                    Some(path) => {
                        let encoded: String = url::form_urlencoded::byte_serialize(path.as_bytes()).collect();
                        format!("{login}?returnTo={encoded}")
                    }
                    None => login,
                })
            }
            AccessDecision::RedirectToHome { locale } => Some(locale.localize("/")),
            AccessDecision::Allow | AccessDecision::Deny(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::DEFAULT_LOGIN_PATH;

    #[test]
    fn login_location_without_return_to() {
        let decision = AccessDecision::RedirectToLogin {
            locale: Locale::Uz,
            return_to: None,
        };
        assert_eq!(decision.location(DEFAULT_LOGIN_PATH).as_deref(), Some("/uz/login"));
    }

    #[test]
    fn login_location_encodes_return_to() {
        let decision = AccessDecision::RedirectToLogin {
            locale: Locale::En,
            return_to: Some("/sales/leads".to_string()),
        };
        assert_eq!(
            decision.location(DEFAULT_LOGIN_PATH).as_deref(),
            Some("/en/login?returnTo=%2Fsales%2Fleads")
        );
    }

    #[test]
    fn home_location_and_non_redirects() {
        assert_eq!(
            AccessDecision::RedirectToHome { locale: Locale::Tr }
                .location(DEFAULT_LOGIN_PATH)
                .as_deref(),
            Some("/tr")
        );
        assert_eq!(AccessDecision::Allow.location(DEFAULT_LOGIN_PATH), None);
    }

    #[test]
    fn serialized_shape() {
        let decision = AccessDecision::Deny(Denial {
            reason: DenyReason::ModuleDisabled,
            module: Some("inventory".to_string()),
            fallback: Fallback::ModuleUnavailable,
        });
        assert_eq!(
            serde_json::to_value(&decision).unwrap(),
            serde_json::json!({
                "decision": "deny",
                "reason": "module_disabled",
                "module": "inventory",
                "fallback": { "kind": "module_unavailable" },
            })
        );
    }
}
