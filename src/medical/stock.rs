//! Medication Stock
//!
//! What each account has on hand. Entries reference a medication by id
//! only; there is no catalog behind it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use super::error::{MedicalError, MedicalResult};

/// A stock entry owned by one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub stock_id: u64,
    pub medication_id: u64,
    pub quantity: Option<i64>,
    pub unit: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub opened_at: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// New stock entry body. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockRequest {
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub opened_at: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug)]
struct OwnedEntry {
    owner: String,
    entry: StockEntry,
}

/// Stock entries of every account
#[derive(Debug)]
pub struct StockLedger {
    entries: RwLock<Vec<OwnedEntry>>,
    next_id: AtomicU64,
}

impl Default for StockLedger {
    fn default() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(
        &self,
        owner: &str,
        medication_id: u64,
        request: StockRequest,
    ) -> MedicalResult<StockEntry> {
        if request.quantity.is_some_and(|q| q < 0) {
            return Err(MedicalError::Invalid(
                "Quantity must not be negative".to_string(),
            ));
        }

        let entry = StockEntry {
            stock_id: self.next_id.fetch_add(1, Ordering::Relaxed),
            medication_id,
            quantity: request.quantity,
            unit: request.unit,
            expiration_date: request.expiration_date,
            opened_at: request.opened_at,
            notes: request.notes,
            created_at: Utc::now(),
        };

        self.entries.write().await.push(OwnedEntry {
            owner: owner.to_string(),
            entry: entry.clone(),
        });

        tracing::debug!(stock_id = entry.stock_id, medication_id, "Stock entry added");
        Ok(entry)
    }

    /// Every entry owned by `owner`
    pub async fn list(&self, owner: &str) -> Vec<StockEntry> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|e| e.owner == owner)
            .map(|e| e.entry.clone())
            .collect()
    }

    pub async fn get(&self, owner: &str, stock_id: u64) -> MedicalResult<StockEntry> {
        self.entries
            .read()
            .await
            .iter()
            .find(|e| e.owner == owner && e.entry.stock_id == stock_id)
            .map(|e| e.entry.clone())
            .ok_or(MedicalError::StockNotFound)
    }
}
