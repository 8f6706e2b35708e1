//! One-shot gate evaluation against a supplied token.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use homestay_gate::{AccessGate, Decision, DenialKind, GateProps, GateState, Navigator};
use homestay_session::{MemoryStorage, SessionConfig, SessionStore, TokenSessionStore};
use homestay_web::guard_for;

/// What to check the token against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A path looked up in the protected route table.
    Route(String),
    /// An ad-hoc gate.
    Gate(GateProps),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// `false` for public routes.
    pub guarded: bool,
    pub allowed_roles: Vec<String>,
    pub fallback_path: Option<String>,
    pub state: GateState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denial: Option<DenialKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

pub async fn evaluate(target: &Target, token: Option<&str>, config: &SessionConfig) -> anyhow::Result<Report> {
    let (route, props) = match target {
        Target::Route(path) => match guard_for(path) {
            Some(guard) => (Some(path.clone()), guard.props()),
            None => {
                tracing::info!(route = %path, "public route; no gate applies");
                return Ok(Report {
                    route: Some(path.clone()),
                    guarded: false,
                    allowed_roles: Vec::new(),
                    fallback_path: None,
                    state: GateState::Granted,
                    denial: None,
                    reason: None,
                    redirect: None,
                });
            }
        },
        Target::Gate(props) => (None, props.clone()),
    };

    let storage = match token {
        Some(token) => MemoryStorage::with_entry(config.storage_key.clone(), token),
        None => MemoryStorage::new(),
    };
    let store: Rc<dyn SessionStore> = Rc::new(TokenSessionStore::new(storage, config.clone()));

    let redirect = Rc::new(RefCell::new(None::<String>));
    let navigator: Rc<dyn Navigator> = {
        let redirect = Rc::clone(&redirect);
        Rc::new(move |path: &str| {
            redirect.borrow_mut().replace(path.to_string());
        })
    };

    let mut gate = AccessGate::new(props.clone(), store, navigator);
    let verdict = gate.mount().run().await;
    let decision = verdict.decision.clone();
    let state = gate.commit(verdict)?;

    let (denial, reason) = match decision {
        Decision::Grant => (None, None),
        Decision::Deny(denial) => (Some(denial.kind()), Some(denial.to_string())),
    };
    let redirect = redirect.borrow_mut().take();

    Ok(Report {
        route,
        guarded: true,
        allowed_roles: props
            .allowed_roles
            .as_slice()
            .iter()
            .map(|r| r.as_str().to_string())
            .collect(),
        fallback_path: Some(props.fallback_path.as_str().to_string()),
        state,
        denial,
        reason,
        redirect,
    })
}
