//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::IssuedToken;
use crate::inventory::MedicationRow;
use crate::medical::{StockEntry, SymptomLog};

// ============================================
// AUTH DTOs
// ============================================

/// Login and signup request body
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Issued token response
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always "bearer"
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl From<IssuedToken> for TokenResponse {
    fn from(token: IssuedToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: "bearer".to_string(),
            expires_at: token.expires_at,
        }
    }
}

/// Current session response
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

// ============================================
// INVENTORY DTOs
// ============================================

/// Query parameters for the inventory endpoint
#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    /// Number of rows to generate, defaults to the configured count
    #[serde(default)]
    pub count: Option<usize>,
}

/// Generated inventory batch
#[derive(Debug, Serialize, Deserialize)]
pub struct InventoryResponse {
    pub total: usize,
    pub rows: Vec<MedicationRow>,
}

// ============================================
// MEDICAL DTOs
// ============================================

/// Symptom logs of the current account
#[derive(Debug, Serialize, Deserialize)]
pub struct SymptomLogsResponse {
    pub symptom_logs: Vec<SymptomLog>,
}

/// Stock entries of the current account
#[derive(Debug, Serialize, Deserialize)]
pub struct UserMedicationsResponse {
    pub medications: Vec<StockEntry>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Number of registered accounts
    pub accounts: usize,
    /// Number of tokens currently held
    pub active_sessions: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// API version
    pub version: String,
}
