//! Route guard component driving an [`AccessGate`].

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use leptos_router::{NavigateOptions, use_navigate};

use homestay_auth::AllowedRoles;
use homestay_gate::{AccessGate, Evaluation, GateProps, GateState, Navigator};

use crate::frontend::session::use_browser_session;
use crate::routes::guard_for;

/// [`Navigator`] over the Leptos router.
///
/// Navigation is deferred to the next animation frame so that the route
/// change never runs while the gate is still being updated.
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        Self {
            navigate: Rc::new(use_navigate()),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        let navigate = Rc::clone(&self.navigate);
        let path = path.to_string();
        request_animation_frame(move || {
            navigate(
                &path,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            )
        });
    }
}

/// Renders `children` only once the current visitor is authorized.
#[component]
pub fn ProtectedRoute(
    #[prop(into)] allowed_roles: MaybeSignal<AllowedRoles>,
    #[prop(optional, into)] fallback_path: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_browser_session();
    let props = Signal::derive(move || {
        let props = GateProps::new(allowed_roles.get());
        match fallback_path.get() {
            Some(path) => props.with_fallback(path),
            None => props,
        }
    });

    let gate = Rc::new(RefCell::new(AccessGate::new(
        props.get_untracked(),
        session.store(),
        Rc::new(RouterNavigator::new()),
    )));
    let state = create_rw_signal(GateState::Checking);

    {
        let gate = Rc::clone(&gate);
        create_effect(move |mounted: Option<()>| {
            let props = props.get();
            let evaluation = {
                let mut gate = gate.borrow_mut();
                match mounted {
                    None => {
                        gate.set_props(props);
                        Some(gate.mount())
                    }
                    Some(()) => gate.set_props(props),
                }
            };
            if let Some(evaluation) = evaluation {
                state.set(GateState::Checking);
                spawn_evaluation(Rc::clone(&gate), evaluation, state);
            }
        });
    }

    on_cleanup(move || gate.borrow_mut().unmount());

    move || match state.get() {
        GateState::Checking => view! { <Loading/> }.into_view(),
        GateState::Granted => children().into_view(),
        GateState::Denied => ().into_view(),
    }
}

/// Wraps a page with the guard declared for `path` in the route table.
///
/// A path missing from the table admits nobody.
#[component]
pub fn GuardedPage(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let props = match guard_for(path) {
        Some(guard) => guard.props(),
        None => {
            tracing::warn!(path, "no guard declared for protected page; denying all");
            GateProps::new(AllowedRoles::none())
        }
    };

    ProtectedRoute(
        ProtectedRouteProps::builder()
            .allowed_roles(props.allowed_roles)
            .fallback_path(props.fallback_path.as_str().to_string())
            .children(children)
            .build(),
    )
}

#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class="gate-loading" aria-busy="true">
            <span class="spinner"></span>
            <p>"Checking access..."</p>
        </div>
    }
}

fn spawn_evaluation(gate: Rc<RefCell<AccessGate>>, evaluation: Evaluation, state: RwSignal<GateState>) {
    spawn_local(async move {
        let verdict = evaluation.run().await;
        let committed = gate.borrow_mut().commit(verdict);
        match committed {
            Ok(next) => state.set(next),
            Err(e) => tracing::debug!(error = %e, "discarding gate verdict"),
        }
    });
}
