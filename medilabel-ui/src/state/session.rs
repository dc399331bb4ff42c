//! Browser Session
//!
//! Login state kept in `localStorage` under `isLoggedIn` and `token`.

use leptos::*;
use leptos_router::*;

pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";
pub const TOKEN_KEY: &str = "token";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn get(key: &str) -> Option<String> {
    storage()?.get_item(key).ok()?
}

/// A session exists when the flag is set or a non-empty token is stored
pub fn admits(flag: Option<&str>, token: Option<&str>) -> bool {
    flag == Some("true") || token.is_some_and(|t| !t.is_empty())
}

pub fn has_session() -> bool {
    admits(get(IS_LOGGED_IN_KEY).as_deref(), get(TOKEN_KEY).as_deref())
}

pub fn token() -> Option<String> {
    get(TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Persist a successful login
pub fn store_login(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(IS_LOGGED_IN_KEY, "true");
    }
}

/// Drop both session keys
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(IS_LOGGED_IN_KEY);
    }
}

/// Renders its children only with a session; otherwise redirects to `/login`
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    move || {
        if has_session() {
            children().into_view()
        } else {
            view! { <Redirect path="/login" /> }.into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_admits() {
        assert!(admits(Some("true"), None));
        assert!(!admits(Some("false"), None));
    }

    #[test]
    fn test_token_admits() {
        assert!(admits(None, Some("abc")));
        assert!(!admits(None, Some("")));
        assert!(!admits(None, None));
    }
}
