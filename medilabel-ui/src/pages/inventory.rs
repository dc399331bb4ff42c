//! Inventory Page
//!
//! A fresh batch of mock medication rows in a paged table. The batch size
//! buttons ask the server for that many rows.

use leptos::*;

use crate::api;
use crate::components::{DataTable, Loading};
use crate::state::global::GlobalState;

/// Rows shown per table page
pub const PAGE_SIZE: usize = 5;

/// Batch sizes offered above the table
pub const BATCH_SIZES: [usize; 3] = [10, 25, 50];

/// Summary line above the table
pub fn batch_summary(total: usize) -> String {
    match total {
        1 => "1 medication".to_string(),
        n => format!("{} medications", n),
    }
}

#[component]
pub fn Inventory() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (rows, set_rows) = create_signal(Vec::new());
    let (total, set_total) = create_signal(0usize);
    let (batch, set_batch) = create_signal(None::<usize>);
    let (loading, set_loading) = create_signal(true);

    let refresh = move |count: Option<usize>| {
        let state = state.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_inventory(count).await {
                Ok(inventory) => {
                    set_total.set(inventory.total);
                    set_rows.set(inventory.rows);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch inventory: {}", e).into());
                    state.show_error(&e);
                }
            }
            set_loading.set(false);
        });
    };

    let initial = refresh.clone();
    create_effect(move |_| initial(None));

    let regenerate = refresh.clone();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Inventory"</h1>
                    <p class="text-gray-400 mt-1">{move || batch_summary(total.get())}</p>
                </div>
                <div class="flex items-center gap-2">
                    {BATCH_SIZES
                        .into_iter()
                        .map(|size| {
                            let refresh = refresh.clone();
                            view! {
                                <button
                                    on:click=move |_| {
                                        set_batch.set(Some(size));
                                        refresh(Some(size));
                                    }
                                    class=move || if batch.get() == Some(size) {
                                        "px-3 py-2 rounded-lg text-sm bg-primary-600"
                                    } else {
                                        "px-3 py-2 rounded-lg text-sm bg-gray-700 hover:bg-gray-600"
                                    }
                                >
                                    {size}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        on:click=move |_| regenerate(batch.get_untracked())
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm"
                    >
                        "Regenerate"
                    </button>
                </div>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                {move || if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    view! { <DataTable rows=rows page_size=PAGE_SIZE /> }.into_view()
                }}
            </section>
        </div>
    }
}
