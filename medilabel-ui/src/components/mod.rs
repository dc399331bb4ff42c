//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod card;
pub mod chart;
pub mod data_table;
pub mod lists;
pub mod loading;
pub mod nav;
pub mod toast;

pub use card::Card;
pub use chart::{BarChart, PieChart};
pub use data_table::DataTable;
pub use lists::{RefillList, SymptomList};
pub use loading::{CardSkeletons, Loading};
pub use nav::Nav;
pub use toast::Toast;
