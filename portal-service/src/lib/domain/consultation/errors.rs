use thiserror::Error;

/// Consultation request errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsultationError {
    #[error("Age must be between {min} and {max}, got {actual}")]
    AgeOutOfRange { min: i32, max: i32, actual: i32 },
    #[error("Height must be between {min} and {max} cm, got {actual}")]
    HeightOutOfRange { min: i32, max: i32, actual: i32 },
    #[error("Weight must be between {min} and {max} kg, got {actual}")]
    WeightOutOfRange { min: i32, max: i32, actual: i32 },
    #[error("Symptoms description must be between {min} and {max} characters")]
    SymptomsLength { min: usize, max: usize },
    #[error("Internal error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ConsultationError {
    fn from(err: anyhow::Error) -> Self {
        ConsultationError::Unknown(err.to_string())
    }
}
