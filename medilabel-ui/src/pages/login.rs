//! Login Page
//!
//! Email/password form. A successful login stores the session and opens
//! the dashboard; a failure shows the server's message inline.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        set_submitting.set(true);
        set_error.set(None);

        let state = state.clone();
        let navigate = navigate.clone();
        let (email, password) = (email.get(), password.get());
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(token) => {
                    state.login(&token);
                    state.show_success("Signed in");
                    navigate("/dashboard", Default::default());
                }
                Err(message) => set_error.set(Some(message)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[70vh]">
            <form on:submit=on_submit class="w-full max-w-sm bg-gray-800 rounded-xl p-8 space-y-5">
                <div class="text-center">
                    <div class="text-4xl mb-2">"💊"</div>
                    <h1 class="text-2xl font-bold">"Sign in to MediLabel"</h1>
                </div>

                {move || error.get().map(|message| view! {
                    <div class="bg-red-900/60 border border-red-700 text-red-200 text-sm rounded-lg px-4 py-3">
                        {message}
                    </div>
                })}

                <label class="block">
                    <span class="text-sm text-gray-400">"Email"</span>
                    <input
                        type="email"
                        required=true
                        class="mt-1 w-full bg-gray-700 rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-primary-500"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>

                <label class="block">
                    <span class="text-sm text-gray-400">"Password"</span>
                    <input
                        type="password"
                        required=true
                        class="mt-1 w-full bg-gray-700 rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-primary-500"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <button
                    type="submit"
                    disabled=submitting
                    class="w-full py-3 bg-primary-600 hover:bg-primary-700 disabled:opacity-50 rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
