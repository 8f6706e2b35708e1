//! `homestay-session` — the locally persisted visitor session.
//!
//! Provides the [`SessionStore`] contract consumed by route gates, plus a
//! token-backed implementation over pluggable key/value storage.

pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{MemoryStorage, SessionStorage};
pub use store::{SessionStore, TokenSessionStore};
