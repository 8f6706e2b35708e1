//! Browser session shared through the Leptos context.

use std::rc::Rc;

use leptos::*;

use homestay_session::{LocalStorage, SessionConfig, SessionResult, SessionStore, TokenSessionStore};

/// The visitor's session, backed by `window.localStorage`.
#[derive(Clone)]
pub struct BrowserSession(Rc<TokenSessionStore<LocalStorage>>);

impl BrowserSession {
    pub fn new() -> Self {
        Self(Rc::new(TokenSessionStore::new(
            LocalStorage,
            SessionConfig::default(),
        )))
    }

    /// Read-only view handed to access gates.
    pub fn store(&self) -> Rc<dyn SessionStore> {
        self.0.clone()
    }

    pub fn sign_in(&self, token: &str) -> SessionResult<()> {
        self.0.sign_in(token)
    }

    pub fn sign_out(&self) -> SessionResult<()> {
        self.0.sign_out()
    }
}

pub fn provide_browser_session() {
    provide_context(BrowserSession::new());
}

pub fn use_browser_session() -> BrowserSession {
    expect_context::<BrowserSession>()
}
