//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use super::session;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Mirrors the stored session so the navbar can react to login/logout
    pub logged_in: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        logged_in: create_rw_signal(session::has_session()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    pub fn login(&self, token: &str) {
        session::store_login(token);
        self.logged_in.set(true);
    }

    pub fn logout(&self) {
        session::clear();
        self.logged_in.set(false);
    }
}
