//! Card Component
//!
//! A titled container with one value, an optional caption and an optional
//! link. The size class sets the column span on the dashboard grid.

use leptos::*;
use leptos_router::*;

use crate::components::{BarChart, DataTable, PieChart, RefillList, SymptomList};
use crate::state::models::{CardSize, CardValue, PlacedCard, Widget};

/// Dashboard card
#[component]
pub fn Card(
    card: PlacedCard,
    /// Render at full width regardless of the card's size
    #[prop(default = false)]
    full_width: bool,
) -> impl IntoView {
    let size = if full_width { CardSize::Large } else { card.size };
    let class = format!(
        "{} block bg-gray-800 rounded-xl p-6 border border-gray-700",
        size.span_class()
    );

    let body = view! {
        <h2 class="text-lg font-semibold mb-4">{card.title.clone()}</h2>
        <CardBody value=card.value.clone() />
        {card.status.clone().map(|status| view! {
            <p class="text-sm text-gray-400 mt-4">{status}</p>
        })}
    };

    match card.href {
        Some(href) if !full_width => view! {
            <A href=href class=format!("{} hover:border-gray-500 transition-colors", class)>
                {body}
            </A>
        }
        .into_view(),
        _ => view! { <div class=class>{body}</div> }.into_view(),
    }
}

#[component]
fn CardBody(value: CardValue) -> impl IntoView {
    match value {
        CardValue::Text(text) => view! { <div class="text-3xl font-bold">{text}</div> }.into_view(),
        CardValue::Widget(Widget::Completion(data)) => view! { <PieChart data=data /> }.into_view(),
        CardValue::Widget(Widget::WeeklyDoses(data)) => view! { <BarChart data=data /> }.into_view(),
        CardValue::Widget(Widget::Refills(refills)) => {
            view! { <RefillList refills=refills /> }.into_view()
        }
        CardValue::Widget(Widget::Symptoms(symptoms)) => {
            view! { <SymptomList symptoms=symptoms /> }.into_view()
        }
        CardValue::Widget(Widget::Inventory(rows)) => {
            view! { <DataTable rows=Signal::derive(move || rows.clone()) /> }.into_view()
        }
    }
}
