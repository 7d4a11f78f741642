//! Presentation-side wrapper around the gate.
//!
//! A [`ModuleGuard`] sits in front of one protected view. It collects the two
//! asynchronously fetched inputs (session and tenant configuration), shows a
//! loading state until both have arrived, then asks the gate exactly once.
//! Protected content is only ever produced from a computed `Allow`.

use erpgate_auth::Principal;

use crate::config::BusinessConfiguration;
use crate::decision::{AccessDecision, Fallback};
use crate::gate::AccessGate;
use crate::messages::Notice;
use crate::route::{FallbackView, RouteContext};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot<T> {
    Pending,
    Ready(T),
}

impl<T> Slot<T> {
    fn ready(&self) -> Option<&T> {
        match self {
            Slot::Ready(v) => Some(v),
            Slot::Pending => None,
        }
    }
}

/// What the wrapper renders right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardView {
    Loading,
    Content,
    Redirect(String),
    Replacement(FallbackView),
    Notice(Notice),
    /// The surrounding request went away before both inputs resolved.
    Cancelled,
}

#[derive(Debug)]
pub struct ModuleGuard<'g> {
    gate: &'g AccessGate,
    route: RouteContext,
    principal: Slot<Option<Principal>>,
    config: Slot<BusinessConfiguration>,
    decision: Option<AccessDecision>,
    cancelled: bool,
}

impl<'g> ModuleGuard<'g> {
    pub fn new(gate: &'g AccessGate, route: RouteContext) -> Self {
        Self {
            gate,
            route,
            principal: Slot::Pending,
            config: Slot::Pending,
            decision: None,
            cancelled: false,
        }
    }

    pub fn principal_resolved(&mut self, principal: Option<Principal>) {
        if self.accepts_input("principal") {
            self.principal = Slot::Ready(principal);
        }
    }

    /// Session lookup failed (malformed or expired); same as anonymous.
    pub fn session_failed(&mut self) {
        self.principal_resolved(None);
    }

    pub fn configuration_resolved(&mut self, config: BusinessConfiguration) {
        if self.accepts_input("configuration") {
            self.config = Slot::Ready(config);
        }
    }

    /// Configuration fetch failed; continue with the fail-closed sentinel.
    pub fn configuration_failed(&mut self) {
        tracing::warn!(path = %self.route.path, "module configuration unavailable; failing closed");
        self.configuration_resolved(BusinessConfiguration::unavailable());
    }

    pub fn cancel(&mut self) {
        if self.decision.is_none() {
            self.cancelled = true;
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.cancelled && self.decision.is_none() && self.inputs().is_none()
    }

    pub fn decision(&self) -> Option<&AccessDecision> {
        self.decision.as_ref()
    }

    /// Current view. Computes the decision on the first call after both
    /// inputs are present; later calls reuse it.
    pub fn view(&mut self) -> GuardView {
        if self.cancelled {
            return GuardView::Cancelled;
        }

        if self.decision.is_none() {
            let Some((principal, config)) = self.inputs() else {
                return GuardView::Loading;
            };
            let decision = self.gate.decide(&self.route, principal.as_ref(), config);
            self.decision = Some(decision);
        }

        match &self.decision {
            Some(AccessDecision::Allow) => GuardView::Content,
            Some(d @ (AccessDecision::RedirectToLogin { .. } | AccessDecision::RedirectToHome { .. })) => self
                .gate
                .location(d)
                .map(GuardView::Redirect)
                .unwrap_or(GuardView::Loading),
            Some(AccessDecision::Deny(denial)) => match &denial.fallback {
                Fallback::Replacement(view) => GuardView::Replacement(view.clone()),
                Fallback::ModuleUnavailable => {
                    GuardView::Notice(Notice::for_denial(self.route.locale, denial))
                }
            },
            None => GuardView::Loading,
        }
    }

    fn inputs(&self) -> Option<(&Option<Principal>, &BusinessConfiguration)> {
        Some((self.principal.ready()?, self.config.ready()?))
    }

    fn accepts_input(&self, what: &str) -> bool {
        if self.cancelled || self.decision.is_some() {
            tracing::debug!(input = what, path = %self.route.path, "ignoring late guard input");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::DenyReason;
    use erpgate_auth::Role;
    use erpgate_core::{Locale, ModuleKey, TenantId, UserId};

    fn staff() -> Principal {
        Principal::new(UserId::new(), TenantId::new(), Role::Staff)
    }

    fn inventory_route() -> RouteContext {
        RouteContext::module(Locale::Ru, "/inventory/reception", ModuleKey::Inventory)
    }

    #[test]
    fn loading_until_both_inputs_arrive() {
        let gate = AccessGate::default();
        let mut guard = ModuleGuard::new(&gate, inventory_route());

        assert!(guard.is_loading());
        assert_eq!(guard.view(), GuardView::Loading);

        guard.principal_resolved(Some(staff()));
        assert_eq!(guard.view(), GuardView::Loading);
        assert!(guard.decision().is_none());

        guard.configuration_resolved(
            BusinessConfiguration::new().with_module(ModuleKey::Inventory, true),
        );
        assert_eq!(guard.view(), GuardView::Content);
        assert!(!guard.is_loading());
    }

    #[test]
    fn inputs_may_arrive_in_any_order() {
        let gate = AccessGate::default();
        let mut guard = ModuleGuard::new(&gate, inventory_route());

        guard.configuration_resolved(BusinessConfiguration::new());
        assert_eq!(guard.view(), GuardView::Loading);
        guard.principal_resolved(Some(staff()));

        let GuardView::Notice(notice) = guard.view() else {
            panic!("expected notice");
        };
        assert_eq!(notice.action_href, "/ru/settings");
    }

    #[test]
    fn failed_session_redirects_to_login() {
        let gate = AccessGate::default();
        let mut guard = ModuleGuard::new(&gate, inventory_route());

        guard.session_failed();
        guard.configuration_resolved(BusinessConfiguration::tenant_default());
        assert_eq!(guard.view(), GuardView::Redirect("/ru/login".to_string()));
    }

    #[test]
    fn failed_configuration_fails_closed() {
        let gate = AccessGate::default();
        let mut guard = ModuleGuard::new(&gate, inventory_route());

        guard.principal_resolved(Some(staff()));
        guard.configuration_failed();
        guard.view();

        assert_eq!(
            guard.decision().and_then(|d| d.denial()).map(|d| d.reason),
            Some(DenyReason::ConfigurationUnavailable)
        );
    }

    #[test]
    fn decision_is_not_revisited() {
        let gate = AccessGate::default();
        let mut guard = ModuleGuard::new(&gate, inventory_route());

        guard.principal_resolved(Some(staff()));
        guard.configuration_resolved(BusinessConfiguration::new());
        let first = guard.view();

        guard.configuration_resolved(
            BusinessConfiguration::new().with_module(ModuleKey::Inventory, true),
        );
        assert_eq!(guard.view(), first);
    }

    #[test]
    fn cancelled_guard_never_decides() {
        let gate = AccessGate::default();
        let mut guard = ModuleGuard::new(&gate, inventory_route());

        guard.principal_resolved(Some(staff()));
        guard.cancel();
        guard.configuration_resolved(BusinessConfiguration::tenant_default());

        assert_eq!(guard.view(), GuardView::Cancelled);
        assert!(guard.decision().is_none());
    }

    #[test]
    fn replacement_view_is_rendered_on_denial() {
        let gate = AccessGate::default();
        let route = inventory_route().with_fallback(FallbackView::new("inventory-upsell"));
        let mut guard = ModuleGuard::new(&gate, route);

        guard.principal_resolved(Some(staff()));
        guard.configuration_resolved(BusinessConfiguration::new());
        assert_eq!(
            guard.view(),
            GuardView::Replacement(FallbackView::new("inventory-upsell"))
        );
    }
}
