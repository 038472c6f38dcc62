use thiserror::Error;

use crate::domain::pharmacy::models::MedicineId;

/// Pharmacy catalog and ordering errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PharmacyError {
    #[error("Quantity must be between {min} and {max}, got {actual}")]
    QuantityOutOfRange { min: i32, max: i32, actual: i32 },
    #[error("Medicine not found: {0}")]
    MedicineNotFound(MedicineId),
    #[error("Medicine is out of stock: {0}")]
    OutOfStock(String),
    #[error("Prescription required")]
    PrescriptionRequired,
    #[error("Stored price is not a decimal number: {0}")]
    InvalidPrice(String),
    #[error("Internal error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for PharmacyError {
    fn from(err: anyhow::Error) -> Self {
        PharmacyError::Unknown(err.to_string())
    }
}
