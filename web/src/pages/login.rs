//! Login page - credentials form plus Google federation.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use shared::messages;

use crate::services::{auth, google};
use crate::state::session::use_session_context;

const GOOGLE_BUTTON_ID: &str = "google-signin";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let (identifier, set_identifier) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    // One-shot notice handed over by another flow (account deletion).
    let notice = session.take_notice();

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_loading.set(true);

        let identifier = identifier.get_untracked();
        let password = password.get_untracked();
        let navigate = submit_navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::login(identifier.trim(), &password).await {
                Ok(token) => {
                    session.set_token(token);
                    navigate("/home", Default::default());
                }
                Err(err) => {
                    log::warn!("login failed: {err:?}");
                    set_error.set(Some(messages::login_error(&err)));
                    set_loading.set(false);
                }
            }
        });
    };

    // Mount the Google button once the page is in the DOM.
    let google_navigate = navigate.clone();
    Effect::new(move |_| {
        let navigate = google_navigate.clone();
        google::mount_sign_in_button(GOOGLE_BUTTON_ID, move |credential| match credential {
            None => set_error.set(Some(messages::GOOGLE_TOKEN_MISSING.to_string())),
            Some(id_token) => {
                set_error.set(None);
                let navigate = navigate.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match auth::login_with_google(&id_token).await {
                        Ok(token) => {
                            session.set_token(token);
                            navigate("/home", Default::default());
                        }
                        Err(err) => {
                            log::warn!("google exchange failed: {err:?}");
                            set_error.set(Some(messages::google_error(&err)));
                        }
                    }
                });
            }
        });
    });

    view! {
        <div class="page auth-page">
            <div class="form-container">
                <h2>"Connectez-vous"</h2>
                {notice.map(|text| view! { <p class="success-message">{text}</p> })}
                {move || error.get().map(|text| view! { <p class="error-message">{text}</p> })}
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="usernameOrEmail">"Nom d'utilisateur ou Email"</label>
                        <input
                            type="text"
                            id="usernameOrEmail"
                            prop:value=identifier
                            on:input=move |ev| set_identifier.set(event_target_value(&ev))
                            required
                            disabled=loading
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Mot de passe"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=loading
                        />
                    </div>
                    <button type="submit" disabled=loading>
                        {move || if loading.get() { "Connexion…" } else { "Connexion" }}
                    </button>
                </form>
                <div class="divider">"OU"</div>
                <div class="google-login-button" id=GOOGLE_BUTTON_ID></div>
                <p class="navigation-link">
                    "Pas encore de compte ? "
                    <A href="/register">"S'inscrire ici"</A>
                </p>
            </div>
        </div>
    }
}
