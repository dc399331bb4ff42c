//! Medical Routes
//!
//! Every route needs a bearer token and only sees the caller's records.
//!
//! - GET /api/symptoms - List symptom logs
//! - POST /api/symptoms - Log a symptom
//! - PUT /api/symptoms/:id - Update a symptom log
//! - DELETE /api/symptoms/:id - Delete a symptom log
//! - POST /api/medications/:id/stock - Record stock of a medication
//! - GET /api/user/medications - List stock entries
//! - GET /api/medications/stock/:id - One stock entry

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use super::auth::session_email;
use crate::api::dto::{SymptomLogsResponse, UserMedicationsResponse};
use crate::api::error::ApiResult;
use crate::api::extract::{ApiJson, ApiPath};
use crate::api::state::AppState;
use crate::medical::{StockEntry, StockRequest, SymptomLog, SymptomLogRequest, SymptomLogUpdate};

/// GET /api/symptoms
pub async fn list_symptoms(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<SymptomLogsResponse>> {
    let email = session_email(&state, &headers).await?;
    let symptom_logs = state.symptoms.list(&email).await;
    Ok(Json(SymptomLogsResponse { symptom_logs }))
}

/// POST /api/symptoms
pub async fn create_symptom(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<SymptomLogRequest>,
) -> ApiResult<(StatusCode, Json<SymptomLog>)> {
    let email = session_email(&state, &headers).await?;
    let log = state.symptoms.add(&email, req).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// PUT /api/symptoms/:id
pub async fn update_symptom(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiPath(symptom_id): ApiPath<String>,
    ApiJson(update): ApiJson<SymptomLogUpdate>,
) -> ApiResult<Json<SymptomLog>> {
    let email = session_email(&state, &headers).await?;
    let log = state.symptoms.update(&email, &symptom_id, update).await?;
    Ok(Json(log))
}

/// DELETE /api/symptoms/:id
pub async fn delete_symptom(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiPath(symptom_id): ApiPath<String>,
) -> ApiResult<StatusCode> {
    let email = session_email(&state, &headers).await?;
    state.symptoms.remove(&email, &symptom_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/medications/:id/stock
pub async fn add_stock(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiPath(medication_id): ApiPath<u64>,
    ApiJson(req): ApiJson<StockRequest>,
) -> ApiResult<(StatusCode, Json<StockEntry>)> {
    let email = session_email(&state, &headers).await?;
    let entry = state.stock.add(&email, medication_id, req).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/user/medications
pub async fn list_stock(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<UserMedicationsResponse>> {
    let email = session_email(&state, &headers).await?;
    let medications = state.stock.list(&email).await;
    Ok(Json(UserMedicationsResponse { medications }))
}

/// GET /api/medications/stock/:id
pub async fn get_stock(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiPath(stock_id): ApiPath<u64>,
) -> ApiResult<Json<StockEntry>> {
    let email = session_email(&state, &headers).await?;
    let entry = state.stock.get(&email, stock_id).await?;
    Ok(Json(entry))
}
