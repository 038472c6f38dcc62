use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::consultation::errors::ConsultationError;
use crate::domain::consultation::models::Consultation;
use crate::domain::consultation::models::CreateConsultationCommand;
use crate::domain::consultation::models::NewConsultation;
use crate::domain::consultation::ports::ConsultationRepository;
use crate::domain::consultation::ports::ConsultationServicePort;
use crate::user::models::UserId;

/// Domain service implementation for consultation operations.
pub struct ConsultationService<CR>
where
    CR: ConsultationRepository,
{
    repository: Arc<CR>,
}

impl<CR> ConsultationService<CR>
where
    CR: ConsultationRepository,
{
    /// Create a new consultation service with an injected repository.
    ///
    /// # Arguments
    /// * `repository` - Consultation persistence implementation
    ///
    /// # Returns
    /// Configured consultation service instance
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ConsultationServicePort for ConsultationService<CR>
where
    CR: ConsultationRepository,
{
    async fn create_consultation(
        &self,
        user_id: UserId,
        command: CreateConsultationCommand,
    ) -> Result<Consultation, ConsultationError> {
        self.repository
            .create(NewConsultation {
                user_id,
                age: command.age,
                height: command.height,
                weight: command.weight,
                blood_type: command.blood_type,
                symptoms: command.symptoms,
            })
            .await
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Consultation>, ConsultationError> {
        self.repository.find_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::consultation::models::ConsultationId;

    mock! {
        pub TestConsultationRepository {}

        #[async_trait]
        impl ConsultationRepository for TestConsultationRepository {
            async fn create(&self, consultation: NewConsultation) -> Result<Consultation, ConsultationError>;
            async fn find_for_user(&self, user_id: &UserId) -> Result<Vec<Consultation>, ConsultationError>;
        }
    }

    fn stored(consultation: NewConsultation) -> Consultation {
        Consultation {
            id: ConsultationId(1),
            user_id: consultation.user_id,
            age: consultation.age,
            height: consultation.height,
            weight: consultation.weight,
            blood_type: consultation.blood_type,
            symptoms: consultation.symptoms,
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_consultation_binds_user() {
        let mut repository = MockTestConsultationRepository::new();

        repository
            .expect_create()
            .withf(|consultation| {
                consultation.user_id == UserId(7)
                    && consultation.age == 34
                    && consultation.symptoms == "persistent cough and fever"
            })
            .times(1)
            .returning(|consultation| Ok(stored(consultation)));

        let service = ConsultationService::new(Arc::new(repository));

        let command = CreateConsultationCommand::new(
            34,
            178,
            72,
            Some("A+".to_string()),
            "persistent cough and fever".to_string(),
        )
        .unwrap();

        let consultation = service.create_consultation(UserId(7), command).await.unwrap();

        assert_eq!(consultation.user_id, UserId(7));
        assert_eq!(consultation.status, "pending");
        assert_eq!(consultation.blood_type.as_deref(), Some("A+"));
    }

    #[tokio::test]
    async fn test_list_for_user_passes_through() {
        let mut repository = MockTestConsultationRepository::new();

        repository
            .expect_find_for_user()
            .withf(|user_id| *user_id == UserId(7))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ConsultationService::new(Arc::new(repository));

        let consultations = service.list_for_user(&UserId(7)).await.unwrap();
        assert!(consultations.is_empty());
    }
}
