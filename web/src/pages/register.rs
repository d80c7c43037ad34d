//! Registration page.
//!
//! Client-side validation is advisory: a submission that fails the local
//! checks never reaches the backend, but the backend remains the
//! authority and its 400 payload is distributed into per-field errors.

use std::collections::BTreeMap;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use shared::dto::auth::RegisterRequest;
use shared::{messages, validation};

use crate::services::auth;
use crate::utils::constants::REGISTER_REDIRECT_DELAY_MS;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (message, set_message) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (field_errors, set_field_errors) = signal(BTreeMap::<String, String>::new());
    let (loading, set_loading) = signal(false);

    // Editing a field clears its error and the general banner.
    let clear_field_error = move |field: &'static str| {
        set_field_errors.update(|errors| {
            errors.remove(field);
        });
        set_error.set(None);
    };

    let field_error = move |field: &'static str| {
        field_errors.with(|errors| errors.get(field).cloned())
    };

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_message.set(None);
        set_error.set(None);
        set_field_errors.set(BTreeMap::new());

        let username = username.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();

        let local_errors = validation::validate_registration(&username, &email, &password);
        if !local_errors.is_empty() {
            set_error.set(Some(messages::REGISTER_FIX_FIELDS.to_string()));
            set_field_errors.set(local_errors);
            return;
        }

        set_loading.set(true);
        let navigate = submit_navigate.clone();
        leptos::task::spawn_local(async move {
            let request = RegisterRequest {
                username,
                email,
                password,
            };
            match auth::register(&request).await {
                Ok(response) => {
                    let text = response.message.clone().unwrap_or_else(|| {
                        format!("Registration successful for {}!", response.username)
                    });
                    set_message.set(Some(text));
                    set_username.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                    // Leave the success message readable before moving on.
                    TimeoutFuture::new(REGISTER_REDIRECT_DELAY_MS).await;
                    navigate("/login", Default::default());
                }
                Err(err) => {
                    log::warn!("registration failed: {err:?}");
                    let failure = messages::register_failure(&err);
                    set_error.set(Some(failure.banner));
                    set_field_errors.set(failure.field_errors);
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="page auth-page">
            <div class="form-container">
                <h2>"Créer un compte"</h2>
                {move || message.get().map(|text| view! { <p class="success-message">{text}</p> })}
                {move || error.get().map(|text| view! { <p class="error-message">{text}</p> })}
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Nom d'utilisateur"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=username
                            on:input=move |ev| {
                                set_username.set(event_target_value(&ev));
                                clear_field_error("username");
                            }
                            required
                            disabled=loading
                        />
                        {move || field_error("username")
                            .map(|text| view! { <span class="field-error">{text}</span> })}
                    </div>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=email
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                clear_field_error("email");
                            }
                            required
                            disabled=loading
                        />
                        {move || field_error("email")
                            .map(|text| view! { <span class="field-error">{text}</span> })}
                    </div>
                    <div class="form-group">
                        <label for="password">"Mot de passe"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=password
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                                clear_field_error("password");
                            }
                            required
                            disabled=loading
                        />
                        {move || field_error("password")
                            .map(|text| view! { <span class="field-error">{text}</span> })}
                    </div>
                    <button type="submit" disabled=loading>"Créer mon compte"</button>
                </form>
                <p class="navigation-link">
                    "Déjà un compte ? "
                    <A href="/login">"Se connecter ici"</A>
                </p>
            </div>
        </div>
    }
}
