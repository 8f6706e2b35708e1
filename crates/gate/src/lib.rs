//! `homestay-gate` — client-side route authorization gating.
//!
//! A gate decides, per mount, whether the current visitor may see a protected
//! screen. It is fail-closed: any doubt about identity ends in denial, and the
//! wrapped content is only ever shown once access has been granted.

pub mod decision;
pub mod gate;
pub mod navigator;
pub mod props;
pub mod state;
pub mod testing;

pub use decision::decide;
pub use gate::{AccessGate, CommitError, Evaluation, GateView, Ticket, Verdict};
pub use navigator::Navigator;
pub use props::{FallbackPath, GateProps, LANDING_PATH, LOGIN_PATH};
pub use state::{Decision, Denial, DenialKind, GateState};
