//! Dashboard Layout
//!
//! Assembles the fixed card sequence and places it on a 12-column grid.
//! Cards flow left to right and wrap to a new row when the next card's span
//! no longer fits.

use serde::{Deserialize, Serialize};

use super::card::{CardSize, CardSpec};
use super::routes::Route;
use super::widgets::{refills, symptoms, CompletionData, WeeklyDoses, Widget, WidgetTheme};
use crate::inventory::generate_medication_rows;

/// Width of the dashboard grid in columns
pub const GRID_COLUMNS: u8 = 12;

/// Inputs for building the dashboard
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Number of mock inventory rows on the inventory card
    pub inventory_rows: usize,
    /// Chart color scheme
    pub theme: WidgetTheme,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            inventory_rows: 10,
            theme: WidgetTheme::default(),
        }
    }
}

/// A card with its grid position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedCard {
    #[serde(flatten)]
    pub card: CardSpec,
    pub column_span: u8,
    pub row: usize,
    pub column: u8,
}

/// The arranged dashboard grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub columns: u8,
    pub cards: Vec<PlacedCard>,
}

impl DashboardLayout {
    /// Place cards in order on the grid
    pub fn arrange(cards: Vec<CardSpec>) -> Self {
        let mut placed = Vec::with_capacity(cards.len());
        let mut row = 0;
        let mut column: u8 = 0;

        for card in cards {
            let span = card.column_span().min(GRID_COLUMNS);
            if column > 0 && column + span > GRID_COLUMNS {
                row += 1;
                column = 0;
            }

            placed.push(PlacedCard {
                card,
                column_span: span,
                row,
                column,
            });

            column += span;
            if column >= GRID_COLUMNS {
                row += 1;
                column = 0;
            }
        }

        Self {
            columns: GRID_COLUMNS,
            cards: placed,
        }
    }

    /// Number of grid rows in use
    pub fn row_count(&self) -> usize {
        self.cards.iter().map(|c| c.row + 1).max().unwrap_or(0)
    }

    pub fn find(&self, title: &str) -> Option<&PlacedCard> {
        self.cards.iter().find(|c| c.card.title == title)
    }

    /// The card linking to `route`, if any
    pub fn for_route(&self, route: Route) -> Option<&PlacedCard> {
        self.cards
            .iter()
            .find(|c| c.card.href.as_deref() == Some(route.path()))
    }
}

/// The fixed, ordered card sequence of the dashboard
pub fn default_cards(options: &DashboardOptions) -> Vec<CardSpec> {
    let completion = CompletionData::themed(options.theme);
    let adherence_status = if completion.completed_percent() >= 70 {
        "On track"
    } else {
        "Behind schedule"
    };

    let refill_list = refills();
    let refill_status = format!("{} medications running low", refill_list.len());

    vec![
        CardSpec::new("Medication Adherence", Widget::Completion(completion))
            .size(CardSize::Medium)
            .status(adherence_status)
            .link(Route::Adherence),
        CardSpec::new(
            "Weekly Doses",
            Widget::WeeklyDoses(WeeklyDoses::themed(options.theme)),
        )
        .size(CardSize::Medium)
        .link(Route::History),
        CardSpec::new("Upcoming Refills", Widget::Refills(refill_list))
            .size(CardSize::Small)
            .status(refill_status)
            .link(Route::Refills),
        CardSpec::new("Symptoms Logged", Widget::Symptoms(symptoms()))
            .size(CardSize::Small)
            .link(Route::Symptoms),
        CardSpec::new(
            "Inventory",
            Widget::Inventory(generate_medication_rows(options.inventory_rows)),
        )
        .size(CardSize::Large)
        .link(Route::Inventory),
    ]
}

/// Build and arrange the dashboard. Inventory rows are regenerated on every call.
pub fn build_dashboard(options: &DashboardOptions) -> DashboardLayout {
    let layout = DashboardLayout::arrange(default_cards(options));
    tracing::debug!(
        cards = layout.cards.len(),
        rows = layout.row_count(),
        "Built dashboard layout"
    );
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::card::CardValue;

    #[test]
    fn test_default_card_order() {
        let titles: Vec<String> = default_cards(&DashboardOptions::default())
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Medication Adherence",
                "Weekly Doses",
                "Upcoming Refills",
                "Symptoms Logged",
                "Inventory"
            ]
        );
    }

    #[test]
    fn test_every_section_has_a_card() {
        let layout = build_dashboard(&DashboardOptions::default());
        for route in Route::SECTIONS {
            assert!(layout.for_route(route).is_some(), "no card for {}", route);
        }
    }

    #[test]
    fn test_arrange_wraps_rows() {
        let layout = build_dashboard(&DashboardOptions::default());
        let placement: Vec<(usize, u8, u8)> = layout
            .cards
            .iter()
            .map(|c| (c.row, c.column, c.column_span))
            .collect();

        assert_eq!(
            placement,
            vec![(0, 0, 6), (0, 6, 6), (1, 0, 3), (1, 3, 3), (2, 0, 12)]
        );
        assert_eq!(layout.row_count(), 3);
    }

    #[test]
    fn test_spans_follow_size() {
        let layout = build_dashboard(&DashboardOptions::default());
        for placed in &layout.cards {
            assert_eq!(placed.column_span, placed.card.size.column_span());
        }
    }

    #[test]
    fn test_inventory_row_count_option() {
        let options = DashboardOptions {
            inventory_rows: 4,
            ..Default::default()
        };
        let layout = build_dashboard(&options);
        let inventory = layout.find("Inventory").unwrap();
        match &inventory.card.value {
            CardValue::Widget(Widget::Inventory(rows)) => assert_eq!(rows.len(), 4),
            other => panic!("unexpected value: {:?}", other),
        }
    }

    #[test]
    fn test_small_card_after_partial_row() {
        let layout = DashboardLayout::arrange(vec![
            CardSpec::new("a", "1").size(CardSize::Medium),
            CardSpec::new("b", "2").size(CardSize::Medium),
            CardSpec::new("c", "3").size(CardSize::Small),
            CardSpec::new("d", "4").size(CardSize::Large),
        ]);
        let rows: Vec<usize> = layout.cards.iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![0, 0, 1, 2]);
    }

    #[test]
    fn test_empty_layout() {
        let layout = DashboardLayout::arrange(Vec::new());
        assert!(layout.cards.is_empty());
        assert_eq!(layout.row_count(), 0);
    }

    #[test]
    fn test_layout_json_round_trip() {
        let layout = build_dashboard(&DashboardOptions::default());
        let json = serde_json::to_string(&layout).unwrap();
        let back: DashboardLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cards.len(), layout.cards.len());
        assert_eq!(back.cards[0].card.title, "Medication Adherence");
        assert_eq!(back.cards[4].column_span, 12);
    }
}
