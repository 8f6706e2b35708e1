//! `homestay-auth` — role claims and session token model.
//!
//! This crate is intentionally decoupled from storage and rendering.

pub mod claims;
pub mod roles;
pub mod token;

pub use claims::{SessionClaims, TokenValidationError, WS_ROLE_CLAIM, validate_claims};
pub use roles::{AllowedRoles, Role};
pub use token::{TokenDecodeError, decode_unverified};
