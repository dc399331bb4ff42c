//! Metric Widgets
//!
//! Display-only datasets behind the dashboard charts and lists. Each widget
//! owns a small literal dataset; nothing here computes adherence, refill or
//! symptom state.

use serde::{Deserialize, Serialize};

use crate::inventory::MedicationRow;

/// Color scheme for the chart widgets
///
/// `Garden` is the olive/lime palette, `Classic` the plain green/red one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetTheme {
    #[default]
    Garden,
    Classic,
}

impl WidgetTheme {
    /// Parse a theme name; unknown names use the default theme
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "classic" => WidgetTheme::Classic,
            _ => WidgetTheme::Garden,
        }
    }
}

/// One slice of a pie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u32,
    pub color: String,
}

/// Two-category completion chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionData {
    pub slices: Vec<PieSlice>,
}

impl CompletionData {
    pub fn themed(theme: WidgetTheme) -> Self {
        let (completed, remaining, done_color, left_color) = match theme {
            WidgetTheme::Garden => (75, 25, "#4f772d", "#ecf39e"),
            WidgetTheme::Classic => (70, 30, "green", "red"),
        };

        Self {
            slices: vec![
                PieSlice {
                    label: "Completed".to_string(),
                    value: completed,
                    color: done_color.to_string(),
                },
                PieSlice {
                    label: "Remaining".to_string(),
                    value: remaining,
                    color: left_color.to_string(),
                },
            ],
        }
    }

    /// Share of the "Completed" slice, in percent of the total
    pub fn completed_percent(&self) -> u32 {
        let total: u32 = self.slices.iter().map(|s| s.value).sum();
        if total == 0 {
            return 0;
        }
        let completed = self
            .slices
            .iter()
            .find(|s| s.label == "Completed")
            .map(|s| s.value)
            .unwrap_or(0);
        completed * 100 / total
    }
}

/// A named bar series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub label: String,
    pub color: String,
    pub data: Vec<u32>,
}

/// A week of completed and missed doses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyDoses {
    pub days: Vec<String>,
    pub series: Vec<BarSeries>,
}

impl WeeklyDoses {
    pub fn themed(theme: WidgetTheme) -> Self {
        let (completed_color, missed_color) = match theme {
            WidgetTheme::Garden => ("#7CFC00", "#FFD54F"),
            WidgetTheme::Classic => ("green", "red"),
        };

        Self {
            days: ["Su", "M", "T", "W", "Th", "F", "Sa"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            series: vec![
                BarSeries {
                    label: "Completed".to_string(),
                    color: completed_color.to_string(),
                    data: vec![4, 3, 5, 2, 6, 4, 1],
                },
                BarSeries {
                    label: "Missed".to_string(),
                    color: missed_color.to_string(),
                    data: vec![1, 2, 2, 3, 1, 1, 0],
                },
            ],
        }
    }

    /// Largest single bar value, used to scale the y-axis
    pub fn max_value(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|s| s.data.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// A medication that needs a refill soon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefillEntry {
    pub name: String,
    pub doses_left: u32,
}

/// A logged symptom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub name: String,
}

/// Upcoming refills. Entries repeat; there is no uniqueness by name.
pub fn refills() -> Vec<RefillEntry> {
    [("Aspirin", 2), ("Metformin", 1)]
        .iter()
        .cycle()
        .take(6)
        .map(|(name, doses_left)| RefillEntry {
            name: name.to_string(),
            doses_left: *doses_left,
        })
        .collect()
}

pub fn symptoms() -> Vec<SymptomEntry> {
    ["Headache", "Backpain"]
        .iter()
        .map(|name| SymptomEntry {
            name: name.to_string(),
        })
        .collect()
}

/// Any widget a card can carry as its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Widget {
    Completion(CompletionData),
    WeeklyDoses(WeeklyDoses),
    Refills(Vec<RefillEntry>),
    Symptoms(Vec<SymptomEntry>),
    Inventory(Vec<MedicationRow>),
}

impl Widget {
    /// Names accepted by [`Widget::by_name`]
    pub const NAMES: [&'static str; 4] = ["completion", "weekly-doses", "refills", "symptoms"];

    /// Look up one of the literal widgets by name
    pub fn by_name(name: &str, theme: WidgetTheme) -> Option<Widget> {
        match name {
            "completion" => Some(Widget::Completion(CompletionData::themed(theme))),
            "weekly-doses" => Some(Widget::WeeklyDoses(WeeklyDoses::themed(theme))),
            "refills" => Some(Widget::Refills(refills())),
            "symptoms" => Some(Widget::Symptoms(symptoms())),
            _ => None,
        }
    }

    /// Number of entries shown by list-style widgets
    pub fn item_count(&self) -> Option<usize> {
        match self {
            Widget::Refills(r) => Some(r.len()),
            Widget::Symptoms(s) => Some(s.len()),
            Widget::Inventory(rows) => Some(rows.len()),
            Widget::Completion(_) | Widget::WeeklyDoses(_) => None,
        }
    }
}
