//! Medication Inventory
//!
//! Synthetic medication records for the inventory table. Rows are generated
//! fresh for every request and never stored.

pub mod generator;
pub mod types;

pub use generator::{
    generate_medication_rows, generate_medication_rows_with, EXPIRATION_HORIZON_DAYS, MAX_DOSAGE_MG,
    MIN_DOSAGE_MG,
};
pub use types::MedicationRow;
