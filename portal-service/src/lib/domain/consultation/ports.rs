use async_trait::async_trait;

use crate::domain::consultation::errors::ConsultationError;
use crate::domain::consultation::models::Consultation;
use crate::domain::consultation::models::CreateConsultationCommand;
use crate::domain::consultation::models::NewConsultation;
use crate::user::models::UserId;

/// Port for consultation request operations.
#[async_trait]
pub trait ConsultationServicePort: Send + Sync + 'static {
    /// Submit a consultation request on behalf of a user.
    ///
    /// # Arguments
    /// * `user_id` - Authenticated user the request belongs to
    /// * `command` - Validated consultation data
    ///
    /// # Returns
    /// The stored consultation in status "pending"
    ///
    /// # Errors
    /// * `Unknown` - Unexpected internal error
    async fn create_consultation(
        &self,
        user_id: UserId,
        command: CreateConsultationCommand,
    ) -> Result<Consultation, ConsultationError>;

    /// List the consultation requests a user has submitted.
    ///
    /// # Arguments
    /// * `user_id` - User whose requests to list
    ///
    /// # Returns
    /// The user's consultations in ascending id order
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Consultation>, ConsultationError>;
}

/// Repository port for consultation persistence.
#[async_trait]
pub trait ConsultationRepository: Send + Sync + 'static {
    /// Persist a new consultation, assigning id, status, and timestamp.
    ///
    /// # Arguments
    /// * `consultation` - Consultation record without an id
    ///
    /// # Returns
    /// The stored consultation
    async fn create(&self, consultation: NewConsultation)
        -> Result<Consultation, ConsultationError>;

    /// Find all consultations belonging to a user.
    ///
    /// # Arguments
    /// * `user_id` - Owning user
    ///
    /// # Returns
    /// The user's consultations in ascending id order
    async fn find_for_user(&self, user_id: &UserId) -> Result<Vec<Consultation>, ConsultationError>;
}
