use std::collections::BTreeMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::consultation::errors::ConsultationError;
use crate::domain::consultation::models::Consultation;
use crate::domain::consultation::models::ConsultationId;
use crate::domain::consultation::models::NewConsultation;
use crate::domain::consultation::ports::ConsultationRepository;
use crate::user::models::UserId;

/// In-memory implementation of ConsultationRepository.
///
/// A BTreeMap keyed by id keeps listings in ascending id order, which for
/// sequentially assigned ids is also submission order.
pub struct InMemoryConsultationRepository {
    consultations: RwLock<BTreeMap<i64, Consultation>>,
    next_id: AtomicI64,
}

impl InMemoryConsultationRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            consultations: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryConsultationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConsultationRepository for InMemoryConsultationRepository {
    async fn create(
        &self,
        consultation: NewConsultation,
    ) -> Result<Consultation, ConsultationError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let consultation = Consultation {
            id: ConsultationId(id),
            user_id: consultation.user_id,
            age: consultation.age,
            height: consultation.height,
            weight: consultation.weight,
            blood_type: consultation.blood_type,
            symptoms: consultation.symptoms,
            status: "pending".to_string(),
            created_at: Utc::now(),
        };

        self.consultations
            .write()
            .await
            .insert(id, consultation.clone());

        Ok(consultation)
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Consultation>, ConsultationError> {
        Ok(self
            .consultations
            .read()
            .await
            .values()
            .filter(|consultation| consultation.user_id == *user_id)
            .cloned()
            .collect())
    }
}
