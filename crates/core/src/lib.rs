//! `erpgate-core` — primitives shared by every access-control crate.
//!
//! This crate contains **pure** types only (no IO, no framework code).

pub mod error;
pub mod id;
pub mod locale;
pub mod module;

pub use error::DomainError;
pub use id::{TenantId, UserId};
pub use locale::Locale;
pub use module::ModuleKey;
