//! `erpgate-gate` — module visibility and route access decisions.
//!
//! The gate is a pure policy component: it never loads sessions or tenant
//! configuration itself. Callers resolve both, hand them to
//! [`AccessGate::decide`], and act on the returned [`AccessDecision`].

pub mod config;
pub mod decision;
pub mod gate;
pub mod guard;
pub mod messages;
pub mod route;

pub use config::BusinessConfiguration;
pub use decision::{AccessDecision, Denial, DenyReason, Fallback};
pub use gate::{AccessGate, GatePolicy, decide};
pub use guard::{GuardView, ModuleGuard};
pub use messages::Notice;
pub use route::{FallbackView, RouteContext, RouteError, RouteTable, RouteTarget, DEFAULT_LOGIN_PATH};
