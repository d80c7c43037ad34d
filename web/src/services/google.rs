//! Google Identity Services interop via wasm-bindgen.
//!
//! The GSI script is loaded from the host page; these bindings initialize
//! the widget, render the sign-in button and hand the ID token back to
//! Rust as a plain string (or null when the widget produced none).

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::utils::constants::GOOGLE_CLIENT_ID;

#[wasm_bindgen(inline_js = "
export function renderGoogleButton(clientId, elementId, onCredential) {
    if (!(window.google && window.google.accounts && window.google.accounts.id)) {
        return false;
    }
    window.google.accounts.id.initialize({
        client_id: clientId,
        callback: (response) => {
            onCredential(response && response.credential ? response.credential : null);
        },
    });
    const target = document.getElementById(elementId);
    if (target) {
        window.google.accounts.id.renderButton(target, { theme: 'outline', size: 'large' });
    }
    return true;
}
")]
extern "C" {
    /// Returns false when the GSI script is not loaded.
    fn renderGoogleButton(client_id: &str, element_id: &str, on_credential: &js_sys::Function)
        -> bool;
}

/// Mount the Google sign-in button into the element with `element_id`.
/// The callback receives the ID token, or `None` when the widget failed
/// to produce one.
pub fn mount_sign_in_button(
    element_id: &str,
    mut on_credential: impl FnMut(Option<String>) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |credential: JsValue| {
        on_credential(credential.as_string());
    }) as Box<dyn FnMut(JsValue)>);

    if !renderGoogleButton(GOOGLE_CLIENT_ID, element_id, closure.as_ref().unchecked_ref()) {
        log::warn!("Google Identity Services script not loaded; sign-in button unavailable");
    }
    // The widget keeps invoking the callback for the page's lifetime.
    closure.forget();
}
