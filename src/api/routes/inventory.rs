//! Inventory Routes
//!
//! - GET /api/inventory?count=N - A freshly generated batch of mock rows

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{InventoryQuery, InventoryResponse};
use crate::api::extract::ApiQuery;
use crate::api::state::AppState;
use crate::inventory::generate_medication_rows;

/// GET /api/inventory
///
/// `count` defaults to the configured row count and is clamped to the
/// configured maximum.
pub async fn list_inventory(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<InventoryQuery>,
) -> Json<InventoryResponse> {
    let requested = query.count.unwrap_or(state.dashboard.inventory_rows);
    let count = requested.min(state.max_inventory_rows);
    if count < requested {
        tracing::debug!(requested, count, "Clamped inventory batch size");
    }

    let rows = generate_medication_rows(count);

    Json(InventoryResponse {
        total: rows.len(),
        rows,
    })
}
