//! Inventory data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single synthetic medication record
///
/// `id` is the 1-based position of the row inside the batch that produced it,
/// so ids are only unique within one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRow {
    pub id: u32,
    pub medication_name: String,
    /// Dosage formatted as `"<n>mg"`
    pub dosage: String,
    pub expiration_date: DateTime<Utc>,
}

impl MedicationRow {
    /// Numeric part of the dosage, if it is well formed
    pub fn dosage_mg(&self) -> Option<u32> {
        self.dosage.strip_suffix("mg")?.parse().ok()
    }
}
