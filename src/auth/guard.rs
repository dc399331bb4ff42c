//! Session Guard
//!
//! Decides whether a route may be shown based on the client-side session
//! indicators. This only mirrors what the client believes about itself; it
//! is not an authentication check.

use super::session::{SessionStore, IS_LOGGED_IN_KEY};
use crate::dashboard::Route;

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Whether the store holds either session indicator
///
/// A storage failure counts as no session.
pub fn has_session(store: &dyn SessionStore) -> bool {
    let flagged = matches!(store.get(IS_LOGGED_IN_KEY), Ok(Some(v)) if v == "true");
    flagged || matches!(store.token(), Ok(Some(_)))
}

/// Check access to `route`, redirecting to the login page without a session
pub fn check(store: &dyn SessionStore, route: Route) -> GuardDecision {
    if !route.requires_session() || has_session(store) {
        return GuardDecision::Allow;
    }

    tracing::debug!(route = %route, "No session, redirecting to login");
    GuardDecision::Redirect(Route::Login)
}
