//! Navigation Component
//!
//! Header navigation bar with brand, section links and, while a session
//! is held, sign-out.
//! Hidden on the login page.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;

/// Whether the navbar is shown for `path`
pub fn nav_visible(path: &str) -> bool {
    path.trim_end_matches('/') != "/login"
}

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let location = use_location();
    let navigate = use_navigate();
    let logged_in = state.logged_in;

    let sign_out = move |_| {
        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                web_sys::console::warn_1(&format!("Logout request failed: {}", e).into());
            }
            state.logout();
            navigate("/login", Default::default());
        });
    };

    view! {
        <Show when=move || nav_visible(&location.pathname.get())>
            <nav class="bg-gray-800 border-b border-gray-700">
                <div class="container mx-auto px-4">
                    <div class="flex items-center justify-between h-16">
                        // Logo and brand
                        <A href="/dashboard" class="flex items-center space-x-3">
                            <span class="text-2xl">"💊"</span>
                            <span class="text-xl font-bold text-white">"MediLabel"</span>
                        </A>

                        // Navigation links
                        <div class="flex items-center space-x-1">
                            <NavLink href="/dashboard" label="Dashboard" />
                            <NavLink href="/dashboard/inventory" label="Inventory" />
                            <NavLink href="/dashboard/adherence" label="Adherence" />
                            <NavLink href="/dashboard/history" label="History" />
                            <Show when=move || logged_in.get()>
                                <button
                                    on:click=sign_out.clone()
                                    class="ml-4 px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-red-700 transition-colors"
                                >
                                    "Sign out"
                                </button>
                            </Show>
                        </div>
                    </div>
                </div>
            </nav>
        </Show>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_hidden_on_login() {
        assert!(!nav_visible("/login"));
        assert!(!nav_visible("/login/"));
        assert!(nav_visible("/dashboard"));
        assert!(nav_visible("/"));
    }
}
