//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton grid shown while the dashboard loads
#[component]
pub fn CardSkeletons(#[prop(default = 4)] count: usize) -> impl IntoView {
    view! {
        <div class="grid grid-cols-12 gap-4">
            {(0..count).map(|_| view! {
                <div class="col-span-12 md:col-span-6 bg-gray-800 rounded-xl p-6 animate-pulse">
                    <div class="h-4 bg-gray-700 rounded w-1/3 mb-4" />
                    <div class="h-32 bg-gray-700 rounded" />
                </div>
            }).collect_view()}
        </div>
    }
}
