//! List Widgets
//!
//! Refill and symptom lists shown inside cards.

use leptos::*;

use crate::state::models::{RefillEntry, SymptomEntry};

#[component]
pub fn RefillList(refills: Vec<RefillEntry>) -> impl IntoView {
    view! {
        <ul class="space-y-2">
            {refills
                .into_iter()
                .map(|refill| view! {
                    <li class="flex items-center justify-between bg-gray-700 rounded px-3 py-2">
                        <span class="text-sm">{refill.name}</span>
                        <span class="text-xs text-yellow-400">
                            {format!("{} doses left", refill.doses_left)}
                        </span>
                    </li>
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn SymptomList(symptoms: Vec<SymptomEntry>) -> impl IntoView {
    view! {
        <ul class="flex flex-wrap gap-2">
            {symptoms
                .into_iter()
                .map(|symptom| view! {
                    <li class="bg-gray-700 rounded-full px-3 py-1 text-sm">{symptom.name}</li>
                })
                .collect_view()}
        </ul>
    }
}
