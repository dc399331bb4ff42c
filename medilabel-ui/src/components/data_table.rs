//! Data Table Component
//!
//! Paged table of medication rows.

use leptos::*;

use crate::state::models::MedicationRow;

/// Number of pages needed for `total` rows (at least one)
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Half-open row range shown on `page` (0-based), clamped to `total`
pub fn page_bounds(total: usize, page: usize, page_size: usize) -> (usize, usize) {
    let start = (page * page_size).min(total);
    let end = (start + page_size).min(total);
    (start, end)
}

/// Row ids restart at 1 in every batch, so the key carries the content too
fn row_key(row: &MedicationRow) -> (u32, String, i64) {
    (
        row.id,
        row.medication_name.clone(),
        row.expiration_date.timestamp_millis(),
    )
}

/// Medication table with previous/next paging
#[component]
pub fn DataTable(
    #[prop(into)] rows: Signal<Vec<MedicationRow>>,
    #[prop(default = 5)] page_size: usize,
) -> impl IntoView {
    let (page, set_page) = create_signal(0usize);
    let pages = create_memo(move |_| page_count(rows.with(|r| r.len()), page_size));

    // A new batch starts from the first page
    create_effect(move |_| {
        rows.with(|_| ());
        set_page.set(0);
    });

    let visible = move || {
        rows.with(|all| {
            let (start, end) = page_bounds(all.len(), page.get(), page_size);
            all[start..end].to_vec()
        })
    };

    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-left text-sm">
                <thead class="text-gray-400 border-b border-gray-700">
                    <tr>
                        <th class="py-2 px-3">"ID"</th>
                        <th class="py-2 px-3">"Medication Name"</th>
                        <th class="py-2 px-3">"Dosage"</th>
                        <th class="py-2 px-3">"Expiration Date"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=row_key
                        children=|row| view! {
                            <tr class="border-b border-gray-800 hover:bg-gray-750">
                                <td class="py-2 px-3 text-gray-400">{row.id}</td>
                                <td class="py-2 px-3">{row.medication_name}</td>
                                <td class="py-2 px-3">{row.dosage}</td>
                                <td class="py-2 px-3">{row.expiration_date.format("%Y-%m-%d").to_string()}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>

            <div class="flex items-center justify-between mt-4 text-sm">
                <button
                    class="px-3 py-1 rounded bg-gray-700 hover:bg-gray-600 disabled:opacity-40"
                    disabled=move || page.get() == 0
                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
                >
                    "Previous"
                </button>
                <span class="text-gray-400">
                    {move || format!("Page {} of {}", page.get() + 1, pages.get())}
                </span>
                <button
                    class="px-3 py-1 rounded bg-gray-700 hover:bg-gray-600 disabled:opacity-40"
                    disabled=move || page.get() + 1 >= pages.get()
                    on:click=move |_| set_page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(10, 5), 2);
        assert_eq!(page_count(11, 5), 3);
        assert_eq!(page_count(0, 5), 1);
    }

    #[test]
    fn test_row_key_differs_across_batches() {
        let first = MedicationRow {
            id: 1,
            medication_name: "Rapid Aspirin Tablets".to_string(),
            dosage: "20mg".to_string(),
            expiration_date: chrono::Utc::now(),
        };
        let mut second = first.clone();
        second.medication_name = "Coated Metformin Caplets".to_string();

        assert_eq!(first.id, second.id);
        assert_ne!(row_key(&first), row_key(&second));
        assert_eq!(row_key(&first), row_key(&first.clone()));
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(10, 0, 5), (0, 5));
        assert_eq!(page_bounds(10, 1, 5), (5, 10));
        assert_eq!(page_bounds(7, 1, 5), (5, 7));
        assert_eq!(page_bounds(7, 4, 5), (7, 7));
    }
}
