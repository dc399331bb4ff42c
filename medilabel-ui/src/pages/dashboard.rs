//! Dashboard Page
//!
//! The card grid, fetched from the API on mount.

use leptos::*;

use crate::api;
use crate::components::{Card, CardSkeletons};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let layout = create_local_resource(
        || (),
        move |_| {
            let state = state.clone();
            async move {
                let result = api::fetch_dashboard().await;
                if let Err(e) = &result {
                    web_sys::console::error_1(&format!("Failed to fetch dashboard: {}", e).into());
                    state.show_error(e);
                }
                result.ok()
            }
        },
    );

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your medications at a glance"</p>
            </div>

            <Suspense fallback=|| view! { <CardSkeletons /> }>
                {move || layout.get().map(|layout| match layout {
                    Some(layout) => view! {
                        <div class="grid grid-cols-12 gap-4">
                            {layout
                                .cards
                                .into_iter()
                                .map(|card| view! { <Card card=card /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view(),
                    None => view! {
                        <p class="text-gray-400">"Dashboard unavailable."</p>
                    }
                    .into_view(),
                })}
            </Suspense>
        </div>
    }
}
