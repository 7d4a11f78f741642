//! Domain error model.

use thiserror::Error;

/// Parsing and validation failures for core primitives.
///
/// Runtime access conditions (disabled modules, missing sessions) are never
/// reported through this type; they are encoded as access decisions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A module key outside the known module set.
    #[error("unknown module '{0}'")]
    UnknownModule(String),

    /// A role name outside the known role set.
    #[error("unknown role '{0}'")]
    UnknownRole(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_module(key: impl Into<String>) -> Self {
        Self::UnknownModule(key.into())
    }

    pub fn unknown_role(role: impl Into<String>) -> Self {
        Self::UnknownRole(role.into())
    }
}
