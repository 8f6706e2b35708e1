//! The authorization decision itself.

use homestay_auth::AllowedRoles;
use homestay_session::SessionStore;

use crate::state::{Decision, Denial};

/// Decide whether the current visitor may see a route.
///
/// Queries the store at most twice (authentication, then role). Any store
/// failure is logged and resolves to a denial.
pub fn decide(store: &dyn SessionStore, allowed: &AllowedRoles) -> Decision {
    if !store.is_authenticated() {
        tracing::debug!("no valid session; sending visitor to login");
        return Decision::Deny(Denial::NotAuthenticated);
    }

    let role = match store.user_role() {
        Ok(role) => role,
        Err(e) => {
            tracing::warn!(error = %e, "session store query failed; denying access");
            return Decision::Deny(Denial::StoreQueryFailure(e));
        }
    };

    match role {
        Some(role) if allowed.permits(&role) => {
            tracing::debug!(role = %role, "role permitted");
            Decision::Grant
        }
        role => {
            tracing::debug!(
                role = role.as_ref().map(|r| r.as_str()).unwrap_or("<absent>"),
                allowed = ?allowed.as_slice(),
                "role not permitted"
            );
            Decision::Deny(Denial::RoleDenied { role })
        }
    }
}
