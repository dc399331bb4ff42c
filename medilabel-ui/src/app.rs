//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, Inventory, Login, Section};
use crate::state::global::provide_global_state;
use crate::state::RequireSession;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header (hidden on /login)
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/login" view=Login />
                        <Route path="/" view=|| view! { <RequireSession><Dashboard /></RequireSession> } />
                        <Route path="/dashboard" view=|| view! { <RequireSession><Dashboard /></RequireSession> } />
                        <Route path="/dashboard/inventory" view=|| view! { <RequireSession><Inventory /></RequireSession> } />
                        <Route path="/dashboard/adherence" view=|| view! { <RequireSession><Section /></RequireSession> } />
                        <Route path="/dashboard/refills" view=|| view! { <RequireSession><Section /></RequireSession> } />
                        <Route path="/dashboard/symptoms" view=|| view! { <RequireSession><Section /></RequireSession> } />
                        <Route path="/dashboard/history" view=|| view! { <RequireSession><Section /></RequireSession> } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/dashboard"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
