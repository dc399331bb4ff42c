//! API Data Models
//!
//! Client-side mirrors of the JSON the MediLabel API serves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mock medication record from `/api/inventory`
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRow {
    pub id: u32,
    pub medication_name: String,
    pub dosage: String,
    pub expiration_date: DateTime<Utc>,
}

/// Card size class. Unknown names fall back to small.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String")]
pub enum CardSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl From<String> for CardSize {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "medium" => CardSize::Medium,
            "large" => CardSize::Large,
            _ => CardSize::Small,
        }
    }
}

impl CardSize {
    /// Tailwind column span on the 12-column grid
    pub fn span_class(self) -> &'static str {
        match self {
            CardSize::Small => "col-span-12 md:col-span-3",
            CardSize::Medium => "col-span-12 md:col-span-6",
            CardSize::Large => "col-span-12",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u32,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CompletionData {
    pub slices: Vec<PieSlice>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BarSeries {
    pub label: String,
    pub color: String,
    pub data: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct WeeklyDoses {
    pub days: Vec<String>,
    pub series: Vec<BarSeries>,
}

impl WeeklyDoses {
    pub fn max_value(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|s| s.data.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefillEntry {
    pub name: String,
    pub doses_left: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SymptomEntry {
    pub name: String,
}

/// Widget payload nested inside a card
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Widget {
    Completion(CompletionData),
    WeeklyDoses(WeeklyDoses),
    Refills(Vec<RefillEntry>),
    Symptoms(Vec<SymptomEntry>),
    Inventory(Vec<MedicationRow>),
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum CardValue {
    Text(String),
    Widget(Widget),
}

/// A card with its grid position, as served by `/api/dashboard`
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PlacedCard {
    pub title: String,
    pub value: CardValue,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub size: CardSize,
    #[serde(default)]
    pub href: Option<String>,
    pub column_span: u8,
    pub row: usize,
    pub column: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DashboardLayout {
    pub columns: u8,
    pub cards: Vec<PlacedCard>,
}

impl DashboardLayout {
    /// The card linking to `path`, if any
    pub fn card_for(&self, path: &str) -> Option<&PlacedCard> {
        self.cards.iter().find(|c| c.href.as_deref() == Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_size_is_small() {
        let size: CardSize = serde_json::from_str("\"huge\"").unwrap();
        assert_eq!(size, CardSize::Small);
        assert_eq!(CardSize::from("Large".to_string()), CardSize::Large);
    }

    #[test]
    fn test_placed_card_parses() {
        let json = r#"{
            "title": "Upcoming Refills",
            "value": {"type": "widget", "content": {"kind": "refills", "data": [{"name": "Aspirin", "dosesLeft": 2}]}},
            "status": "6 medications running low",
            "size": "small",
            "href": "/dashboard/refills",
            "column_span": 3,
            "row": 1,
            "column": 0
        }"#;

        let card: PlacedCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.size.span_class(), "col-span-12 md:col-span-3");
        assert!(matches!(card.value, CardValue::Widget(Widget::Refills(ref r)) if r[0].doses_left == 2));
    }

    #[test]
    fn test_card_for_route() {
        let layout = DashboardLayout {
            columns: 12,
            cards: vec![PlacedCard {
                title: "Symptoms Logged".to_string(),
                value: CardValue::Text("2".to_string()),
                status: None,
                size: CardSize::Small,
                href: Some("/dashboard/symptoms".to_string()),
                column_span: 3,
                row: 0,
                column: 0,
            }],
        };

        assert!(layout.card_for("/dashboard/symptoms").is_some());
        assert!(layout.card_for("/dashboard/history").is_none());
    }
}
