//! Deterministic doubles for exercising gates without persisted storage.

use std::cell::{Cell, RefCell};

use homestay_auth::Role;
use homestay_session::{SessionError, SessionResult, SessionStore};

use crate::navigator::Navigator;

/// Session store with fixed answers that counts how often it is asked.
#[derive(Debug)]
pub struct StaticSession {
    authenticated: bool,
    role: SessionResult<Option<Role>>,
    auth_queries: Cell<usize>,
    role_queries: Cell<usize>,
}

impl StaticSession {
    pub fn new(authenticated: bool, role: SessionResult<Option<Role>>) -> Self {
        Self {
            authenticated,
            role,
            auth_queries: Cell::new(0),
            role_queries: Cell::new(0),
        }
    }

    pub fn signed_out() -> Self {
        Self::new(false, Ok(None))
    }

    pub fn signed_in(role: impl Into<Role>) -> Self {
        Self::new(true, Ok(Some(role.into())))
    }

    pub fn signed_in_without_role() -> Self {
        Self::new(true, Ok(None))
    }

    /// Authenticated, but the role query fails.
    pub fn failing(error: SessionError) -> Self {
        Self::new(true, Err(error))
    }

    pub fn auth_queries(&self) -> usize {
        self.auth_queries.get()
    }

    pub fn role_queries(&self) -> usize {
        self.role_queries.get()
    }
}

impl SessionStore for StaticSession {
    fn is_authenticated(&self) -> bool {
        self.auth_queries.set(self.auth_queries.get() + 1);
        self.authenticated
    }

    fn user_role(&self) -> SessionResult<Option<Role>> {
        self.role_queries.set(self.role_queries.get() + 1);
        self.role.clone()
    }
}

/// Navigator that records every requested path.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.paths.borrow().len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}
