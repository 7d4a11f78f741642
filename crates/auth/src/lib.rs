//! `erpgate-auth` — principal model and session resolution.
//!
//! This crate is intentionally decoupled from HTTP and storage: callers hand it
//! a raw token and a clock reading, it hands back a [`Principal`] or a reason
//! the session is unusable.

pub mod claims;
pub mod jwt;
pub mod principal;
pub mod roles;
pub mod session;

pub use claims::{SessionClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtValidator};
pub use principal::Principal;
pub use roles::Role;
pub use session::{SessionError, principal_from_claims, resolve_session};
