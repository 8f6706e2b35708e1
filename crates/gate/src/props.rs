use serde::{Deserialize, Serialize};

use homestay_auth::AllowedRoles;

/// Destination for visitors without any session. Not configurable.
pub const LOGIN_PATH: &str = "/login";

/// Public landing route, used when a gate is built without a fallback.
pub const LANDING_PATH: &str = "/";

/// Where a signed-in but unpermitted visitor is sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FallbackPath(String);

impl FallbackPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FallbackPath {
    fn default() -> Self {
        Self(LANDING_PATH.to_string())
    }
}

impl core::fmt::Display for FallbackPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a protected page declares about its gate.
///
/// Equality is by value; a gate re-evaluates only when its props change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateProps {
    pub allowed_roles: AllowedRoles,
    #[serde(default)]
    pub fallback_path: FallbackPath,
}

impl GateProps {
    pub fn new(allowed_roles: impl Into<AllowedRoles>) -> Self {
        Self {
            allowed_roles: allowed_roles.into(),
            fallback_path: FallbackPath::default(),
        }
    }

    pub fn with_fallback(mut self, path: impl Into<String>) -> Self {
        self.fallback_path = FallbackPath::new(path);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_defaults_to_landing() {
        let props = GateProps::new(["Admin"]);
        assert_eq!(props.fallback_path.as_str(), "/");
        assert_ne!(props.fallback_path.as_str(), LOGIN_PATH);
    }

    #[test]
    fn props_compare_by_value() {
        assert_eq!(GateProps::new(["Admin"]), GateProps::new(["Admin"]));
        assert_ne!(
            GateProps::new(["Admin"]),
            GateProps::new(["Admin"]).with_fallback("/homestays")
        );
    }

    #[test]
    fn props_deserialize_with_default_fallback() {
        let props: GateProps =
            serde_json::from_value(serde_json::json!({ "allowed_roles": ["Landlord"] })).unwrap();
        assert_eq!(props, GateProps::new(["Landlord"]));
    }
}
