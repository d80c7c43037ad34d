//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let logout = move |_| {
        session.clear();
        navigate("/login", Default::default());
    };

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-brand">
                    <span class="brand-be">"be"</span>
                    <span class="brand-rich">"Rich"</span>
                </A>
                {move || {
                    session.is_authenticated().then(|| {
                        let logout = logout.clone();
                        view! {
                            <div class="nav-links">
                                <A href="/home">"Tableau de bord"</A>
                                <button class="nav-logout" on:click=logout>
                                    "Se déconnecter"
                                </button>
                            </div>
                        }
                    })
                }}
            </div>
        </nav>
    }
}
