//! Session Context
//!
//! Explicit session state built once at app start from durable storage and
//! mutated only by the login/logout handlers. The token lives in
//! `localStorage` under a fixed key so it survives page reloads.

use leptos::prelude::*;

/// localStorage key holding the auth token
const TOKEN_KEY: &str = "token";

/// App-wide session, provided via context
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    /// Build the session from durable storage (anonymous if nothing stored)
    pub fn restore() -> Self {
        Self {
            token: RwSignal::new(load_token()),
        }
    }

    /// Persist a freshly issued token and mark the session authenticated
    pub fn login(&self, token: String) {
        save_token(&token);
        self.token.set(Some(token));
    }

    /// Drop the token from storage and return to the anonymous state
    pub fn logout(&self) {
        clear_token();
        self.token.set(None);
    }

    /// Current token, for attaching to outgoing requests (non-reactive)
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Reactive authentication check, for route guards
    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.is_some())
    }
}

/// Get the session from context
pub fn use_session() -> Session {
    expect_context::<Session>()
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
}

fn load_token() -> Option<String> {
    storage().and_then(|s| s.get_item(TOKEN_KEY).ok()).flatten()
}

fn save_token(token: &str) {
    if let Some(s) = storage() {
        if s.set_item(TOKEN_KEY, token).is_err() {
            log::error!("Failed to persist token to localStorage");
        }
    }
}

fn clear_token() {
    if let Some(s) = storage() {
        let _ = s.remove_item(TOKEN_KEY);
    }
}
