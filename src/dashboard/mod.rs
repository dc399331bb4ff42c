//! Dashboard
//!
//! Card composition for the medication dashboard: the card model, the
//! literal widget datasets, grid placement and the static navigation targets.

pub mod card;
pub mod layout;
pub mod routes;
pub mod widgets;

pub use card::{CardSize, CardSpec, CardValue};
pub use layout::{build_dashboard, default_cards, DashboardLayout, DashboardOptions, PlacedCard, GRID_COLUMNS};
pub use routes::Route;
pub use widgets::{
    refills, symptoms, BarSeries, CompletionData, PieSlice, RefillEntry, SymptomEntry, WeeklyDoses,
    Widget, WidgetTheme,
};
