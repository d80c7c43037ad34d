//! Session state management.
//!
//! The bearer token is the only durable client-side state; it is trusted
//! until the backend rejects it with a 401/403. Writes go through this
//! context only: the auth flows, the account-deletion flow, and any call
//! site that detects an authorization failure.

use crate::utils::storage;
use leptos::prelude::*;

/// Application-scoped session context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    token: RwSignal<Option<String>>,
    notice: RwSignal<Option<String>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            token: RwSignal::new(storage::read_token()),
            notice: RwSignal::new(None),
        }
    }

    /// Reactive presence check, for chrome that follows login state.
    pub fn is_authenticated(&self) -> bool {
        self.token.with(|token| token.is_some())
    }

    /// Non-reactive presence check, for the route guard: the decision is
    /// taken at navigation time and a later token clear must not yank the
    /// current screen before its own redirect fires.
    pub fn has_token_now(&self) -> bool {
        self.token.with_untracked(|token| token.is_some())
    }

    /// Current token, read untracked before an authorized request.
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    pub fn set_token(&self, token: String) {
        storage::write_token(&token);
        self.token.set(Some(token));
    }

    pub fn clear(&self) {
        storage::clear_token();
        self.token.set(None);
    }

    /// Queue a message for the next screen, e.g. the deletion confirmation
    /// shown on the login page after the forced logout.
    pub fn set_notice(&self, message: String) {
        self.notice.set(Some(message));
    }

    /// Read and consume the pending notice.
    pub fn take_notice(&self) -> Option<String> {
        self.notice.try_update(|notice| notice.take()).flatten()
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
