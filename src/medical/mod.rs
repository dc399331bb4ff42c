//! Medical Records
//!
//! Per-account symptom logs and medication stock, held in memory.
//! Every lookup is scoped to the owning account's email; another account's
//! record is indistinguishable from a missing one.

pub mod error;
pub mod stock;
pub mod symptoms;

pub use error::{MedicalError, MedicalResult};
pub use stock::{StockEntry, StockLedger, StockRequest};
pub use symptoms::{
    SymptomJournal, SymptomLog, SymptomLogRequest, SymptomLogUpdate, DEFAULT_SEVERITY,
    MAX_NOTES_CHARS, MAX_SYMPTOM_CHARS,
};
