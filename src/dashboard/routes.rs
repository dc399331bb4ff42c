//! Navigation targets
//!
//! The fixed set of static paths the dashboard links to. Routes carry no
//! parameters and no query state.

use serde::{Deserialize, Serialize};

/// A navigation target in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Login,
    Dashboard,
    Inventory,
    Adherence,
    Refills,
    Symptoms,
    History,
}

impl Route {
    /// Every dashboard section reachable from a card
    pub const SECTIONS: [Route; 5] = [
        Route::Inventory,
        Route::Adherence,
        Route::Refills,
        Route::Symptoms,
        Route::History,
    ];

    /// Static path for this route
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Inventory => "/dashboard/inventory",
            Route::Adherence => "/dashboard/adherence",
            Route::Refills => "/dashboard/refills",
            Route::Symptoms => "/dashboard/symptoms",
            Route::History => "/dashboard/history",
        }
    }

    /// Resolve a path back to a route. `/` is an alias for the dashboard.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        match trimmed {
            "/" | "/dashboard" => Some(Route::Dashboard),
            "/login" => Some(Route::Login),
            other => Self::SECTIONS.into_iter().find(|r| r.path() == other),
        }
    }

    /// Whether the session guard applies to this route
    pub fn requires_session(self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
