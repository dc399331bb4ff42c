//! Section Page
//!
//! Detail view for one dashboard section: the card that links here,
//! shown at full width.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Card, Loading};

#[component]
pub fn Section() -> impl IntoView {
    let location = use_location();

    let layout = create_local_resource(|| (), |_| async { api::fetch_dashboard().await.ok() });

    view! {
        <div class="space-y-6">
            <A href="/dashboard" class="text-sm text-gray-400 hover:text-white">"← Back to dashboard"</A>

            <Suspense fallback=|| view! { <Loading /> }>
                {move || {
                    let path = location.pathname.get();
                    layout.get().map(|layout| {
                        match layout.as_ref().and_then(|l| l.card_for(&path)).cloned() {
                            Some(card) => view! {
                                <div class="grid grid-cols-12 gap-4">
                                    <Card card=card full_width=true />
                                </div>
                            }
                            .into_view(),
                            None => view! {
                                <p class="text-gray-400">"Nothing to show for this section."</p>
                            }
                            .into_view(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
