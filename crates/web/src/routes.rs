//! Protected route table of the homestay web client.

use homestay_auth::AllowedRoles;
use homestay_gate::GateProps;

/// Gate declaration for every path under `prefix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    pub prefix: &'static str,
    pub allowed_roles: &'static [&'static str],
    pub fallback_path: Option<&'static str>,
}

impl RouteGuard {
    const fn new(prefix: &'static str, allowed_roles: &'static [&'static str]) -> Self {
        Self {
            prefix,
            allowed_roles,
            fallback_path: None,
        }
    }

    const fn fallback(mut self, path: &'static str) -> Self {
        self.fallback_path = Some(path);
        self
    }

    pub fn props(&self) -> GateProps {
        let props = GateProps::new(AllowedRoles::from(self.allowed_roles));
        match self.fallback_path {
            Some(path) => props.with_fallback(path),
            None => props,
        }
    }

    fn covers(&self, path: &str) -> bool {
        path == self.prefix
            || path
                .strip_prefix(self.prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

pub const PROTECTED_ROUTES: &[RouteGuard] = &[
    RouteGuard::new("/admin", &["Admin"]),
    RouteGuard::new("/landlord", &["Landlord"]).fallback("/homestays"),
    RouteGuard::new("/bookings", &["Customer", "Landlord"]).fallback("/homestays"),
    RouteGuard::new("/profile", &["Admin", "Landlord", "Customer"]),
];

/// Routes anyone may visit.
pub const PUBLIC_ROUTES: &[&str] = &["/", "/login", "/register", "/homestays"];

/// The guard protecting `path`, if any. The most specific prefix wins.
pub fn guard_for(path: &str) -> Option<&'static RouteGuard> {
    let path = normalize(path);
    PROTECTED_ROUTES
        .iter()
        .filter(|guard| guard.covers(path))
        .max_by_key(|guard| guard.prefix.len())
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_dashboard_requires_admin() {
        let guard = guard_for("/admin").unwrap();
        assert_eq!(guard.props(), GateProps::new(["Admin"]));

        assert_eq!(guard_for("/admin/users").unwrap().prefix, "/admin");
        assert_eq!(guard_for("/admin/homestays/12?tab=photos").unwrap().prefix, "/admin");
    }

    #[test]
    fn landlord_pages_fall_back_to_listings() {
        let props = guard_for("/landlord/homestays/new").unwrap().props();
        assert_eq!(props.fallback_path.as_str(), "/homestays");
        assert!(props.allowed_roles.permits(&"Landlord".into()));
        assert!(!props.allowed_roles.permits(&"Admin".into()));
    }

    #[test]
    fn prefix_matching_respects_segments() {
        assert!(guard_for("/administrator").is_none());
        assert!(guard_for("/profiles").is_none());
        assert_eq!(guard_for("/profile/").unwrap().prefix, "/profile");
    }

    #[test]
    fn public_routes_are_unguarded() {
        for path in PUBLIC_ROUTES {
            assert!(guard_for(path).is_none(), "{path} should be public");
        }
        assert!(guard_for("/homestays/42").is_none());
    }
}
