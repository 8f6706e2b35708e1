//! Client-side decoding of the stored access token.
//!
//! The client never holds the signing key, so the payload is decoded without
//! signature verification. Authority stays with the API.

use std::collections::HashSet;

use jsonwebtoken::{DecodingKey, Validation, decode};
use thiserror::Error;

use crate::SessionClaims;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenDecodeError {
    #[error("token is empty")]
    Empty,

    #[error("token is malformed: {0}")]
    Malformed(String),
}

/// Decode the claims of a JWT without verifying its signature.
///
/// Time-based claims are not checked here; see [`crate::validate_claims`].
pub fn decode_unverified(token: &str) -> Result<SessionClaims, TokenDecodeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(TokenDecodeError::Empty);
    }

    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::new();

    decode::<SessionClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| TokenDecodeError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

    fn mint(payload: serde_json::Value) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .expect("failed to encode jwt")
    }

    #[test]
    fn decodes_claims_signed_with_unknown_key() {
        let token = mint(serde_json::json!({
            "sub": "42",
            "role": "Landlord",
            "exp": 4_102_444_800i64,
            "iat": 1_700_000_000i64,
        }));

        let claims = decode_unverified(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("42"));
        assert_eq!(claims.role_claim(), Some(Role::new("Landlord")));
        assert_eq!(claims.exp, Some(4_102_444_800));
    }

    #[test]
    fn decodes_expired_token_without_failing() {
        let token = mint(serde_json::json!({ "role": "Admin", "exp": 1i64 }));
        let claims = decode_unverified(&token).unwrap();
        assert_eq!(claims.exp, Some(1));
    }

    #[test]
    fn empty_token_is_rejected() {
        assert_eq!(decode_unverified("   "), Err(TokenDecodeError::Empty));
    }

    #[test]
    fn garbage_is_malformed() {
        for raw in ["not-a-jwt", "a.b", "a.b.c", "eyJhbGciOiJIUzI1NiJ9.!!!.sig"] {
            assert!(
                matches!(decode_unverified(raw), Err(TokenDecodeError::Malformed(_))),
                "{raw} should be malformed"
            );
        }
    }
}
