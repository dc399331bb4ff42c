//! Medical record errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MedicalError {
    #[error("{0}")]
    Invalid(String),

    #[error("Symptom log not found")]
    SymptomNotFound,

    #[error("Medication stock entry not found")]
    StockNotFound,
}

pub type MedicalResult<T> = Result<T, MedicalError>;
