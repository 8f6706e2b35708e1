use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Role;

/// Role claim URI emitted by WS-Federation / ASP.NET identity issuers.
pub const WS_ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

/// Decoded payload of the locally stored access token.
///
/// Only the claims the client inspects are modeled; everything else in the
/// payload is ignored. The role is kept as raw JSON so that a malformed role
/// decodes to "absent" rather than failing the whole token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject / user identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    #[serde(
        default,
        alias = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<serde_json::Value>,

    /// Expiration (unix seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued-at (unix seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl SessionClaims {
    /// The role carried by the token, if it decodes to a non-empty string.
    pub fn role_claim(&self) -> Option<Role> {
        match self.role.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(Role::new(s.clone())),
            other => {
                tracing::debug!(claim = %other, "role claim is not a string; treating as absent");
                None
            }
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token carries no expiry")]
    MissingExpiry,

    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate session claims against `now`.
///
/// A token without an expiry is rejected. Signature verification is not
/// possible on the client and is left to the API.
pub fn validate_claims(claims: &SessionClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    let expires_at = claims
        .expires_at()
        .ok_or(TokenValidationError::MissingExpiry)?;

    if let Some(issued_at) = claims.issued_at() {
        if expires_at <= issued_at {
            return Err(TokenValidationError::InvalidTimeWindow);
        }
        if now < issued_at {
            return Err(TokenValidationError::NotYetValid);
        }
    }
    if now >= expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}
