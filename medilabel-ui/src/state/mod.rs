//! State Management
//!
//! Global signals, the browser session and API data models.

pub mod global;
pub mod models;
pub mod session;

pub use global::{provide_global_state, GlobalState};
pub use session::RequireSession;
