//! # MediLabel
//!
//! Medication tracking dashboard backend: mock inventory rows, the
//! dashboard card grid with its chart and list widgets, and a small
//! email/password login service.
//!
//! ## Modules
//!
//! - [`inventory`]: Mock medication row generator
//! - [`dashboard`]: Cards, widgets, grid layout and navigation routes
//! - [`auth`]: Accounts, tokens, client session storage, guard and login flow
//! - [`medical`]: Per-account symptom logs and medication stock
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use medilabel::dashboard::{build_dashboard, DashboardOptions};
//! use medilabel::inventory::generate_medication_rows;
//!
//! let rows = generate_medication_rows(10);
//! assert_eq!(rows.len(), 10);
//!
//! let layout = build_dashboard(&DashboardOptions::default());
//! for placed in &layout.cards {
//!     println!("{} spans {} columns", placed.card.title, placed.column_span);
//! }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod inventory;
pub mod medical;

// Re-export top-level types for convenience
pub use inventory::{generate_medication_rows, MedicationRow};

pub use dashboard::{
    build_dashboard, CardSize, CardSpec, CardValue, DashboardLayout, DashboardOptions, Route,
    Widget, WidgetTheme,
};

pub use auth::{
    submit_login, AccountDirectory, AuthApi, AuthError, FileSessionStore, GuardDecision,
    HttpAuthApi, LoginError, LoginOutcome, MemorySessionStore, Navigator, SessionStore,
    TokenStore,
};

pub use medical::{MedicalError, StockLedger, SymptomJournal};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
