//! The session store contract and its token-backed implementation.

use chrono::{DateTime, Utc};

use homestay_auth::{Role, SessionClaims, decode_unverified, validate_claims};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::storage::SessionStorage;

/// Read-only identity queries consumed by route gates.
///
/// Both queries are synchronous. Implementations must treat "no session" as a
/// normal answer (`false` / `Ok(None)`), never as an error.
pub trait SessionStore {
    /// `true` if a non-expired session token is present locally.
    fn is_authenticated(&self) -> bool;

    /// The role decoded from the stored session, if any.
    ///
    /// `Err` is reserved for unexpected failures (corrupt token, storage
    /// fault).
    fn user_role(&self) -> SessionResult<Option<Role>>;
}

impl<T: SessionStore + ?Sized> SessionStore for std::rc::Rc<T> {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }

    fn user_role(&self) -> SessionResult<Option<Role>> {
        (**self).user_role()
    }
}

/// Session store over a JWT persisted in [`SessionStorage`].
pub struct TokenSessionStore<S> {
    storage: S,
    config: SessionConfig,
    clock: fn() -> DateTime<Utc>,
}

impl<S: SessionStorage> TokenSessionStore<S> {
    pub fn new(storage: S, config: SessionConfig) -> Self {
        Self {
            storage,
            config,
            clock: Utc::now,
        }
    }

    /// Replace the clock used for expiry checks.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Persist a freshly issued access token.
    ///
    /// The token must at least decode; validity is checked on each query.
    pub fn sign_in(&self, token: &str) -> SessionResult<()> {
        decode_unverified(token).map_err(|e| SessionError::decode(e.to_string()))?;
        self.storage.set(&self.config.storage_key, token.trim())?;
        tracing::info!(key = %self.config.storage_key, "session token stored");
        Ok(())
    }

    /// Forget the stored session.
    pub fn sign_out(&self) -> SessionResult<()> {
        self.storage.remove(&self.config.storage_key)?;
        tracing::info!(key = %self.config.storage_key, "session token cleared");
        Ok(())
    }

    /// Raw stored token; blank values count as no session.
    pub fn token(&self) -> SessionResult<Option<String>> {
        Ok(self
            .storage
            .get(&self.config.storage_key)?
            .filter(|t| !t.trim().is_empty()))
    }

    /// Decoded claims of the stored token, if one is present.
    pub fn claims(&self) -> SessionResult<Option<SessionClaims>> {
        let Some(token) = self.token()? else {
            return Ok(None);
        };
        decode_unverified(&token)
            .map(Some)
            .map_err(|e| SessionError::decode(e.to_string()))
    }
}

impl<S: SessionStorage> SessionStore for TokenSessionStore<S> {
    fn is_authenticated(&self) -> bool {
        let claims = match self.claims() {
            Ok(Some(claims)) => claims,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!(error = %e, "stored session unreadable; treating as signed out");
                return false;
            }
        };

        match validate_claims(&claims, (self.clock)()) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(reason = %e, "stored session is not valid");
                false
            }
        }
    }

    fn user_role(&self) -> SessionResult<Option<Role>> {
        Ok(self.claims()?.and_then(|claims| claims.role_claim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        fn get(&self, _key: &str) -> SessionResult<Option<String>> {
            Err(SessionError::storage("quota exceeded"))
        }

        fn set(&self, _key: &str, _value: &str) -> SessionResult<()> {
            Err(SessionError::storage("quota exceeded"))
        }

        fn remove(&self, _key: &str) -> SessionResult<()> {
            Err(SessionError::storage("quota exceeded"))
        }
    }

    #[test]
    fn empty_storage_is_signed_out() {
        let store = TokenSessionStore::new(MemoryStorage::new(), SessionConfig::default());

        assert!(!store.is_authenticated());
        assert_eq!(store.user_role(), Ok(None));
    }

    #[test]
    fn blank_token_is_signed_out() {
        let store = TokenSessionStore::new(
            MemoryStorage::with_entry("accessToken", "  "),
            SessionConfig::default(),
        );

        assert!(!store.is_authenticated());
        assert_eq!(store.user_role(), Ok(None));
    }

    #[test]
    fn corrupt_token_is_not_authenticated_but_role_query_fails() {
        let store = TokenSessionStore::new(
            MemoryStorage::with_entry("accessToken", "garbage"),
            SessionConfig::default(),
        );

        assert!(!store.is_authenticated());
        assert!(matches!(store.user_role(), Err(SessionError::Decode(_))));
    }

    #[test]
    fn storage_fault_never_authenticates() {
        let store = TokenSessionStore::new(BrokenStorage, SessionConfig::default());

        assert!(!store.is_authenticated());
        assert_eq!(
            store.user_role(),
            Err(SessionError::Storage("quota exceeded".to_string()))
        );
        assert!(store.sign_out().is_err());
    }

    #[test]
    fn sign_in_rejects_undecodable_token() {
        let store = TokenSessionStore::new(MemoryStorage::new(), SessionConfig::default());

        assert!(matches!(store.sign_in("nope"), Err(SessionError::Decode(_))));
        assert_eq!(store.token(), Ok(None));
    }
}
