//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use crate::frontend::guard::GuardedPage;
use crate::frontend::session::{provide_browser_session, use_browser_session};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_browser_session();

    view! {
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/homestays" view=HomestaysPage/>
                    <Route path="/homestays/:id" view=HomestaysPage/>
                    <Route path="/admin" view=|| view! {
                        <GuardedPage path="/admin"><AdminDashboard/></GuardedPage>
                    }/>
                    <Route path="/landlord/homestays" view=|| view! {
                        <GuardedPage path="/landlord/homestays"><LandlordHomestays/></GuardedPage>
                    }/>
                    <Route path="/bookings" view=|| view! {
                        <GuardedPage path="/bookings"><BookingsPage/></GuardedPage>
                    }/>
                    <Route path="/profile" view=|| view! {
                        <GuardedPage path="/profile"><ProfilePage/></GuardedPage>
                    }/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    let session = use_browser_session();
    let navigate = use_navigate();

    let sign_out = move |_| {
        if let Err(e) = session.sign_out() {
            tracing::warn!(error = %e, "failed to clear session");
        }
        navigate("/login", Default::default());
    };

    view! {
        <header>
            <A href="/">"Homestay"</A>
            <nav>
                <A href="/homestays">"Homestays"</A>
                <A href="/bookings">"Bookings"</A>
                <A href="/profile">"Profile"</A>
                <button on:click=sign_out>"Sign out"</button>
            </nav>
        </header>
    }
}

#[component]
fn LandingPage() -> impl IntoView {
    view! { <h1>"Find your next homestay"</h1> }
}

#[component]
fn LoginPage() -> impl IntoView {
    let session = use_browser_session();
    let navigate = use_navigate();
    let token = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match session.sign_in(&token.get()) {
            Ok(()) => navigate("/", Default::default()),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <h1>"Sign in"</h1>
        <form on:submit=submit>
            <label for="token">"Access token"</label>
            <input
                id="token"
                type="password"
                prop:value=move || token.get()
                on:input=move |ev| token.set(event_target_value(&ev))
            />
            <button type="submit">"Sign in"</button>
        </form>
        {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
    }
}

#[component]
fn HomestaysPage() -> impl IntoView {
    view! { <h1>"Homestays"</h1> }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    view! { <h1>"Admin dashboard"</h1> }
}

#[component]
fn LandlordHomestays() -> impl IntoView {
    view! { <h1>"My homestays"</h1> }
}

#[component]
fn BookingsPage() -> impl IntoView {
    view! { <h1>"My bookings"</h1> }
}

#[component]
fn ProfilePage() -> impl IntoView {
    view! { <h1>"Profile"</h1> }
}
