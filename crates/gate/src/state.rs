//! Gate lifecycle and the denial taxonomy.

use serde::Serialize;
use thiserror::Error;

use homestay_auth::Role;
use homestay_session::SessionError;

use crate::props::{FallbackPath, LOGIN_PATH};

/// Lifecycle of one authorization check.
///
/// Every evaluation starts in `Checking` and settles exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    Checking,
    Granted,
    Denied,
}

impl GateState {
    pub fn is_settled(self) -> bool {
        !matches!(self, GateState::Checking)
    }
}

/// Why a visitor was turned away.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Denial {
    /// No valid session; the visitor must log in.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Signed in, but the role claim is absent or not allowed here.
    #[error("role {} is not permitted", .role.as_ref().map(Role::as_str).unwrap_or("<absent>"))]
    RoleDenied { role: Option<Role> },

    /// The session store failed unexpectedly; handled like an absent role.
    #[error("session store query failed: {0}")]
    StoreQueryFailure(#[from] SessionError),
}

impl Denial {
    /// Where the visitor is sent. Only the unauthenticated case goes to login.
    pub fn redirect_target<'a>(&self, fallback: &'a FallbackPath) -> &'a str {
        match self {
            Denial::NotAuthenticated => LOGIN_PATH,
            Denial::RoleDenied { .. } | Denial::StoreQueryFailure(_) => fallback.as_str(),
        }
    }

    pub fn kind(&self) -> DenialKind {
        match self {
            Denial::NotAuthenticated => DenialKind::NotAuthenticated,
            Denial::RoleDenied { .. } => DenialKind::RoleDenied,
            Denial::StoreQueryFailure(_) => DenialKind::StoreQueryFailure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    NotAuthenticated,
    RoleDenied,
    StoreQueryFailure,
}

/// Outcome of querying the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Grant,
    Deny(Denial),
}

impl Decision {
    pub fn state(&self) -> GateState {
        match self {
            Decision::Grant => GateState::Granted,
            Decision::Deny(_) => GateState::Denied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unauthenticated_goes_to_login() {
        let fallback = FallbackPath::new("/homestays");

        assert_eq!(Denial::NotAuthenticated.redirect_target(&fallback), "/login");
        assert_eq!(
            Denial::RoleDenied { role: Some(Role::new("Customer")) }.redirect_target(&fallback),
            "/homestays"
        );
        assert_eq!(
            Denial::RoleDenied { role: None }.redirect_target(&fallback),
            "/homestays"
        );
        assert_eq!(
            Denial::StoreQueryFailure(SessionError::decode("bad segment")).redirect_target(&fallback),
            "/homestays"
        );
    }

    #[test]
    fn denial_messages() {
        assert_eq!(
            Denial::RoleDenied { role: Some(Role::new("Customer")) }.to_string(),
            "role Customer is not permitted"
        );
        assert_eq!(
            Denial::RoleDenied { role: None }.to_string(),
            "role <absent> is not permitted"
        );
    }

    #[test]
    fn checking_is_the_only_unsettled_state() {
        assert!(!GateState::Checking.is_settled());
        assert!(GateState::Granted.is_settled());
        assert!(GateState::Denied.is_settled());
    }
}
