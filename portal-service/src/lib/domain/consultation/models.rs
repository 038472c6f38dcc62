use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::consultation::errors::ConsultationError;
use crate::user::models::UserId;

/// Consultation request entity.
///
/// A patient's request for a remote medical consultation. Requests start
/// in status "pending" and are never mutated in this service.
#[derive(Debug, Clone)]
pub struct Consultation {
    pub id: ConsultationId,
    pub user_id: UserId,
    pub age: i32,
    pub height: i32,
    pub weight: i32,
    pub blood_type: Option<String>,
    pub symptoms: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Consultation unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsultationId(pub i64);

impl fmt::Display for ConsultationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// New consultation record handed to the repository, which assigns the id,
/// status, and timestamp.
#[derive(Debug, Clone)]
pub struct NewConsultation {
    pub user_id: UserId,
    pub age: i32,
    pub height: i32,
    pub weight: i32,
    pub blood_type: Option<String>,
    pub symptoms: String,
}

/// Command to submit a consultation request with validated vitals
#[derive(Debug)]
pub struct CreateConsultationCommand {
    pub age: i32,
    pub height: i32,
    pub weight: i32,
    pub blood_type: Option<String>,
    pub symptoms: String,
}

impl CreateConsultationCommand {
    const MIN_AGE: i32 = 18;
    const MAX_AGE: i32 = 120;
    const MIN_HEIGHT_CM: i32 = 100;
    const MAX_HEIGHT_CM: i32 = 250;
    const MIN_WEIGHT_KG: i32 = 30;
    const MAX_WEIGHT_KG: i32 = 300;
    const MIN_SYMPTOMS_LENGTH: usize = 10;
    const MAX_SYMPTOMS_LENGTH: usize = 1000;

    /// Construct a new consultation command.
    ///
    /// Validates that the vitals fall inside plausible adult ranges and
    /// that the symptoms description is substantial.
    ///
    /// # Arguments
    /// * `age` - Patient age in years (18-120)
    /// * `height` - Patient height in centimeters (100-250)
    /// * `weight` - Patient weight in kilograms (30-300)
    /// * `blood_type` - Optional blood type
    /// * `symptoms` - Free-text symptoms description (10-1000 characters)
    ///
    /// # Returns
    /// CreateConsultationCommand with validated fields
    ///
    /// # Errors
    /// * `AgeOutOfRange` - Age outside 18-120
    /// * `HeightOutOfRange` - Height outside 100-250 cm
    /// * `WeightOutOfRange` - Weight outside 30-300 kg
    /// * `SymptomsLength` - Symptoms description too short or too long
    pub fn new(
        age: i32,
        height: i32,
        weight: i32,
        blood_type: Option<String>,
        symptoms: String,
    ) -> Result<Self, ConsultationError> {
        if !(Self::MIN_AGE..=Self::MAX_AGE).contains(&age) {
            return Err(ConsultationError::AgeOutOfRange {
                min: Self::MIN_AGE,
                max: Self::MAX_AGE,
                actual: age,
            });
        }

        if !(Self::MIN_HEIGHT_CM..=Self::MAX_HEIGHT_CM).contains(&height) {
            return Err(ConsultationError::HeightOutOfRange {
                min: Self::MIN_HEIGHT_CM,
                max: Self::MAX_HEIGHT_CM,
                actual: height,
            });
        }

        if !(Self::MIN_WEIGHT_KG..=Self::MAX_WEIGHT_KG).contains(&weight) {
            return Err(ConsultationError::WeightOutOfRange {
                min: Self::MIN_WEIGHT_KG,
                max: Self::MAX_WEIGHT_KG,
                actual: weight,
            });
        }

        let symptoms_length = symptoms.len();
        if !(Self::MIN_SYMPTOMS_LENGTH..=Self::MAX_SYMPTOMS_LENGTH).contains(&symptoms_length) {
            return Err(ConsultationError::SymptomsLength {
                min: Self::MIN_SYMPTOMS_LENGTH,
                max: Self::MAX_SYMPTOMS_LENGTH,
            });
        }

        Ok(Self {
            age,
            height,
            weight,
            blood_type,
            symptoms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(
        age: i32,
        height: i32,
        weight: i32,
        symptoms: &str,
    ) -> Result<CreateConsultationCommand, ConsultationError> {
        CreateConsultationCommand::new(age, height, weight, None, symptoms.to_string())
    }

    #[test]
    fn test_command_accepts_plausible_vitals() {
        assert!(command(34, 178, 72, "persistent cough and fever").is_ok());
    }

    #[test]
    fn test_command_rejects_minor_age() {
        let result = command(17, 178, 72, "persistent cough and fever");
        assert!(matches!(
            result,
            Err(ConsultationError::AgeOutOfRange { min: 18, .. })
        ));
    }

    #[test]
    fn test_command_rejects_implausible_height() {
        let result = command(34, 251, 72, "persistent cough and fever");
        assert!(matches!(
            result,
            Err(ConsultationError::HeightOutOfRange { max: 250, .. })
        ));
    }

    #[test]
    fn test_command_rejects_implausible_weight() {
        let result = command(34, 178, 29, "persistent cough and fever");
        assert!(matches!(
            result,
            Err(ConsultationError::WeightOutOfRange { min: 30, .. })
        ));
    }

    #[test]
    fn test_command_rejects_short_symptoms() {
        let result = command(34, 178, 72, "cough");
        assert!(matches!(
            result,
            Err(ConsultationError::SymptomsLength { min: 10, .. })
        ));
    }

    #[test]
    fn test_command_rejects_overlong_symptoms() {
        let symptoms = "x".repeat(1001);
        let result = CreateConsultationCommand::new(34, 178, 72, None, symptoms);
        assert!(matches!(
            result,
            Err(ConsultationError::SymptomsLength { max: 1000, .. })
        ));
    }

    #[test]
    fn test_command_accepts_boundary_values() {
        assert!(command(18, 100, 30, "ten chars!").is_ok());
        assert!(command(120, 250, 300, &"x".repeat(1000)).is_ok());
    }
}
