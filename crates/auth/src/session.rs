//! Session resolution: raw token → [`Principal`].
//!
//! Every failure here is an *expected* runtime condition. Callers treat any
//! `Err` exactly like an anonymous request.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::claims::{SessionClaims, TokenValidationError, validate_claims};
use crate::jwt::JwtValidator;
use crate::{Principal, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no session token presented")]
    Missing,

    #[error("malformed session token: {0}")]
    Malformed(String),

    #[error(transparent)]
    Token(#[from] TokenValidationError),

    #[error("session carries no role")]
    MissingRole,

    #[error("session carries unknown role '{0}'")]
    UnknownRole(String),
}

/// Build a principal from already-decoded claims.
pub fn principal_from_claims(claims: &SessionClaims, now: DateTime<Utc>) -> Result<Principal, SessionError> {
    validate_claims(claims, now)?;

    let role = match claims.role.as_deref() {
        None | Some("") => return Err(SessionError::MissingRole),
        Some(raw) => raw
            .parse::<Role>()
            .map_err(|_| SessionError::UnknownRole(raw.to_string()))?,
    };

    Ok(Principal::new(claims.sub, claims.tenant_id, role))
}

/// Resolve an optional raw token into a principal.
pub fn resolve_session(
    validator: &dyn JwtValidator,
    token: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Principal, SessionError> {
    let token = token.map(str::trim).filter(|t| !t.is_empty()).ok_or(SessionError::Missing)?;
    let claims = validator.validate(token, now)?;
    let principal = principal_from_claims(&claims, now)?;

    tracing::debug!(
        user_id = %principal.user_id,
        tenant_id = %principal.tenant_id,
        role = %principal.role,
        "session resolved"
    );
    Ok(principal)
}
