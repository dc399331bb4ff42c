//! MediLabel Dashboard
//!
//! Medication tracking dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Email/password login with a browser-stored session
//! - Card grid with adherence, weekly dose, refill and symptom widgets
//! - Paged mock medication inventory
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the MediLabel API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
