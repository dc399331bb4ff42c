//! Dashboard Routes
//!
//! - GET /api/dashboard - Arranged dashboard cards with widget data
//! - GET /api/widgets/:name - A single widget dataset

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::ApiPath;
use crate::api::state::AppState;
use crate::dashboard::{build_dashboard, DashboardLayout, Widget};

/// GET /api/dashboard
///
/// Inventory rows on the dashboard are regenerated on every request.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardLayout> {
    Json(build_dashboard(&state.dashboard))
}

/// GET /api/widgets/:name
pub async fn get_widget(
    State(state): State<Arc<AppState>>,
    ApiPath(name): ApiPath<String>,
) -> ApiResult<Json<Widget>> {
    Widget::by_name(&name, state.dashboard.theme)
        .map(Json)
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "Widget '{}' (expected one of: {})",
                name,
                Widget::NAMES.join(", ")
            ))
        })
}
