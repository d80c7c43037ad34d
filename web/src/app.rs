//! Routing shell and the session-gated navigation guard.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Redirect, Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::pages::{EmailSenderPage, HomePage, LoginPage, RegisterPage};
use crate::state::session::{provide_session_context, use_session_context};

#[component]
pub fn App() -> impl IntoView {
    provide_session_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=RootRedirect/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route
                        path=path!("/home")
                        view=|| view! { <RequireAuth><HomePage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/test-email")
                        view=|| view! { <RequireAuth><EmailSenderPage/></RequireAuth> }
                    />
                </Routes>
            </div>
        </Router>
    }
}

/// Gate for protected screens: renders children only when a token is
/// present, else redirects to the login screen. The check happens at
/// navigation time and is advisory only; the backend validates the token
/// on every call.
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session_context();
    if session.has_token_now() {
        children().into_any()
    } else {
        view! { <Redirect path="/login"/> }.into_any()
    }
}

/// The root path goes to the dashboard when a token is present, else to
/// the login screen.
#[component]
fn RootRedirect() -> impl IntoView {
    let session = use_session_context();
    if session.has_token_now() {
        view! { <Redirect path="/home"/> }.into_any()
    } else {
        view! { <Redirect path="/login"/> }.into_any()
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page-centered">
            <div class="card">
                <h1>"404 - Page introuvable"</h1>
                <p>"La page demandée n'existe pas."</p>
                <A href="/">"Retour à l'accueil"</A>
            </div>
        </div>
    }
}
