use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use erpgate_core::{TenantId, UserId};

/// Session token claims (transport-agnostic).
///
/// `role` is optional on the wire so that a token minted without one decodes
/// successfully and is then rejected explicitly, rather than failing as an
/// opaque decode error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user) identifier.
    pub sub: UserId,

    /// Tenant the session is scoped to.
    pub tenant_id: TenantId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    pub issued_at: DateTime<Utc>,

    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Check the claims' validity window against `now`.
///
/// Signature verification happens in [`crate::jwt`]; this only looks at the
/// decoded timestamps so it stays deterministic under test.
pub fn validate_claims(claims: &SessionClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn claims_at(issued_at: DateTime<Utc>, ttl: Duration) -> SessionClaims {
        SessionClaims {
            sub: UserId::new(),
            tenant_id: TenantId::new(),
            role: Some("staff".to_string()),
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    #[test]
    fn window_boundaries() {
        let now = Utc::now();
        let claims = claims_at(now, Duration::minutes(5));

        assert_eq!(validate_claims(&claims, now), Ok(()));
        assert_eq!(
            validate_claims(&claims, now - Duration::seconds(1)),
            Err(TokenValidationError::NotYetValid)
        );
        assert_eq!(
            validate_claims(&claims, now + Duration::minutes(5)),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn inverted_window_is_rejected_first() {
        let now = Utc::now();
        let claims = claims_at(now, Duration::minutes(-1));
        assert_eq!(
            validate_claims(&claims, now),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }

    #[test]
    fn missing_role_deserializes_as_none() {
        let now = Utc::now();
        let mut claims = claims_at(now, Duration::minutes(5));
        claims.role = None;

        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("role").is_none());

        let back: SessionClaims = serde_json::from_value(json).unwrap();
        assert_eq!(back.role, None);
    }
}
