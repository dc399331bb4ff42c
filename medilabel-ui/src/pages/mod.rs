//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod inventory;
pub mod login;
pub mod section;

pub use dashboard::Dashboard;
pub use inventory::Inventory;
pub use login::Login;
pub use section::Section;
