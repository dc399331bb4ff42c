//! Toast Component
//!
//! Transient status line under the navbar. Messages come from
//! [`GlobalState::show_success`] and [`GlobalState::show_error`] and clear
//! themselves; the close button clears them early.

use leptos::*;

use crate::state::global::GlobalState;

/// Kind of status message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// Tailwind classes for the message box
    pub fn classes(self) -> &'static str {
        match self {
            ToastKind::Success => "border-green-500 bg-green-900/80 text-green-100",
            ToastKind::Error => "border-red-500 bg-red-900/80 text-red-100",
        }
    }

    /// ARIA role; errors interrupt screen readers, successes do not
    pub fn role(self) -> &'static str {
        match self {
            ToastKind::Success => "status",
            ToastKind::Error => "alert",
        }
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed top-20 right-4 z-50 flex flex-col gap-2 w-80">
            {move || success.get().map(|text| view! {
                <ToastLine text=text kind=ToastKind::Success on_close=move || success.set(None) />
            })}
            {move || error.get().map(|text| view! {
                <ToastLine text=text kind=ToastKind::Error on_close=move || error.set(None) />
            })}
        </div>
    }
}

#[component]
fn ToastLine<F>(text: String, kind: ToastKind, on_close: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div
            role=kind.role()
            class=format!("flex items-start justify-between gap-3 border-l-4 rounded px-4 py-3 text-sm shadow {}", kind.classes())
        >
            <span>{text}</span>
            <button aria-label="Dismiss" class="opacity-70 hover:opacity-100" on:click=move |_| on_close()>
                "×"
            </button>
        </div>
    }
}
