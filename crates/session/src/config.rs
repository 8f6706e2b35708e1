//! Session store configuration.

/// Storage key used by the web client for the access token.
pub const DEFAULT_STORAGE_KEY: &str = "accessToken";

/// Environment variable overriding the storage key.
pub const STORAGE_KEY_ENV: &str = "HOMESTAY_SESSION_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Key under which the access token is persisted.
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(STORAGE_KEY_ENV).map(|v| v.trim().to_string()) {
            Some(key) if !key.is_empty() => Self::new(key),
            _ => {
                tracing::warn!(
                    "{} not set; using default session key '{}'",
                    STORAGE_KEY_ENV,
                    DEFAULT_STORAGE_KEY
                );
                Self::default()
            }
        }
    }
}
