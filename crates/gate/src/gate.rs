//! Access gate state machine.
//!
//! A gate wraps one protected region of a page. Each mount (and each change of
//! its props) starts an [`Evaluation`] tagged with a fresh [`Ticket`]. The
//! evaluation runs asynchronously and hands back a [`Verdict`]; only a verdict
//! carrying the current ticket of a mounted gate may be committed. Stale and
//! post-unmount verdicts are dropped without touching state or navigating.

use std::rc::Rc;

use thiserror::Error;

use homestay_session::SessionStore;

use crate::decision::decide;
use crate::navigator::Navigator;
use crate::props::GateProps;
use crate::state::{Decision, GateState};

/// Identity of one evaluation within a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Result of an evaluation, waiting to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub ticket: Ticket,
    pub props: GateProps,
    pub decision: Decision,
}

/// A pending authorization check.
pub struct Evaluation {
    ticket: Ticket,
    props: GateProps,
    store: Rc<dyn SessionStore>,
}

impl Evaluation {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Run the check against the session store.
    ///
    /// Asynchronous so that a network-backed store can slot in without
    /// changing how gates are driven.
    pub async fn run(self) -> Verdict {
        let decision = decide(self.store.as_ref(), &self.props.allowed_roles);
        Verdict {
            ticket: self.ticket,
            props: self.props,
            decision,
        }
    }
}

impl core::fmt::Debug for Evaluation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Evaluation")
            .field("ticket", &self.ticket)
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommitError {
    #[error("gate is not mounted")]
    Unmounted,

    #[error("stale evaluation {} (current is {})", .verdict.generation(), .current.generation())]
    Stale { verdict: Ticket, current: Ticket },

    #[error("evaluation {} already settled", .0.generation())]
    Settled(Ticket),
}

/// What a gate shows for its wrapped content.
#[derive(Debug, PartialEq, Eq)]
pub enum GateView<'a, C: ?Sized> {
    /// Non-sensitive loading indicator.
    Loading,
    /// The wrapped content, unmodified.
    Content(&'a C),
    /// Nothing; navigation is expected to replace the view.
    Empty,
}

impl<C: ?Sized> Clone for GateView<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for GateView<'_, C> {}

/// Client-side route authorization gate.
///
/// This is a UX convenience, not a security boundary; the API must reject
/// unauthorized calls on its own.
pub struct AccessGate {
    props: GateProps,
    store: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    state: GateState,
    current: Ticket,
    mounted: bool,
}

impl AccessGate {
    pub fn new(props: GateProps, store: Rc<dyn SessionStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            props,
            store,
            navigator,
            state: GateState::Checking,
            current: Ticket(0),
            mounted: false,
        }
    }

    pub fn props(&self) -> &GateProps {
        &self.props
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Ticket of the evaluation that may currently commit.
    pub fn current_ticket(&self) -> Ticket {
        self.current
    }

    /// Mount the gate and start its evaluation.
    pub fn mount(&mut self) -> Evaluation {
        self.mounted = true;
        self.begin()
    }

    /// Update props. Starts a new evaluation only if the props changed and the
    /// gate is mounted; any outstanding evaluation becomes stale.
    pub fn set_props(&mut self, props: GateProps) -> Option<Evaluation> {
        if props == self.props {
            return None;
        }
        self.props = props;
        if !self.mounted {
            return None;
        }
        tracing::debug!("gate props changed; re-evaluating");
        Some(self.begin())
    }

    /// Unmount the gate. Outstanding evaluations can no longer commit.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Apply a finished evaluation.
    ///
    /// On denial the state becomes `Denied` before the single navigate call,
    /// so nothing protected is shown while navigation is in flight.
    pub fn commit(&mut self, verdict: Verdict) -> Result<GateState, CommitError> {
        if !self.mounted {
            tracing::debug!(
                ticket = verdict.ticket.generation(),
                "dropping verdict for unmounted gate"
            );
            return Err(CommitError::Unmounted);
        }
        if verdict.ticket != self.current {
            tracing::debug!(
                ticket = verdict.ticket.generation(),
                current = self.current.generation(),
                "dropping stale verdict"
            );
            return Err(CommitError::Stale {
                verdict: verdict.ticket,
                current: self.current,
            });
        }
        if self.state.is_settled() {
            return Err(CommitError::Settled(verdict.ticket));
        }

        self.state = verdict.decision.state();
        if let Decision::Deny(denial) = &verdict.decision {
            let target = denial.redirect_target(&verdict.props.fallback_path);
            tracing::info!(reason = %denial, redirect = target, "access denied; redirecting");
            self.navigator.navigate(target);
        }
        Ok(self.state)
    }

    /// Rendering rule: content only once granted.
    pub fn view<'a, C: ?Sized>(&self, children: &'a C) -> GateView<'a, C> {
        match self.state {
            GateState::Checking => GateView::Loading,
            GateState::Granted => GateView::Content(children),
            GateState::Denied => GateView::Empty,
        }
    }

    fn begin(&mut self) -> Evaluation {
        self.current = Ticket(self.current.0 + 1);
        self.state = GateState::Checking;
        Evaluation {
            ticket: self.current,
            props: self.props.clone(),
            store: Rc::clone(&self.store),
        }
    }
}

impl core::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AccessGate")
            .field("props", &self.props)
            .field("state", &self.state)
            .field("current", &self.current)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
