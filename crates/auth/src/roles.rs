use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role claim carried by a session (e.g. "Admin", "Landlord").
///
/// Roles are opaque, case-sensitive strings; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Role {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Ordered set of roles a protected route accepts.
///
/// Membership is exact string equality at any position. An empty set permits
/// nobody.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedRoles(Vec<Role>);

impl AllowedRoles {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        Self(roles.into_iter().collect())
    }

    /// Nobody is permitted.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn permits(&self, role: &Role) -> bool {
        self.0.iter().any(|allowed| allowed == role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Role] {
        &self.0
    }
}

impl<R: Into<Role>> FromIterator<R> for AllowedRoles {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&[&'static str]> for AllowedRoles {
    fn from(value: &[&'static str]) -> Self {
        value.iter().copied().collect()
    }
}

impl<const N: usize> From<[&'static str; N]> for AllowedRoles {
    fn from(value: [&'static str; N]) -> Self {
        value.into_iter().collect()
    }
}
