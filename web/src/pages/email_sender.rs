//! Diagnostic email-sender screen, posting to the backend test endpoint.

use leptos::prelude::*;

use shared::dto::email::EmailSendRequest;
use shared::messages;

use crate::services::email;
use crate::state::session::use_session_context;

#[component]
pub fn EmailSenderPage() -> impl IntoView {
    let session = use_session_context();

    let (address, set_address) = signal(String::new());
    let (course_name, set_course_name) = signal(String::new());
    let (alert_id, set_alert_id) = signal(String::new());
    let (message, set_message) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.token() else {
            set_message.set(Some(messages::SESSION_EXPIRED.to_string()));
            return;
        };
        let request = EmailSendRequest {
            email: address.get_untracked(),
            course_name: course_name.get_untracked(),
            alert_id: alert_id.get_untracked().parse().unwrap_or(0),
        };
        leptos::task::spawn_local(async move {
            match email::send(&token, &request).await {
                Ok(text) => set_message.set(Some(text)),
                Err(err) => {
                    log::warn!("email send failed: {err:?}");
                    set_message.set(Some(messages::EMAIL_SEND_ERROR.to_string()));
                }
            }
        });
    };

    view! {
        <div class="page">
            <h2>"Tester l'envoi d'email"</h2>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="email">"Email : "</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=address
                        on:input=move |ev| set_address.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="course">"Nom du cours : "</label>
                    <input
                        type="text"
                        id="course"
                        prop:value=course_name
                        on:input=move |ev| set_course_name.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="alert">"ID de l'alerte : "</label>
                    <input
                        type="number"
                        id="alert"
                        prop:value=alert_id
                        on:input=move |ev| set_alert_id.set(event_target_value(&ev))
                        required
                    />
                </div>
                <button type="submit">"Envoyer"</button>
            </form>
            {move || message.get().map(|text| view! { <p>{text}</p> })}
        </div>
    }
}
