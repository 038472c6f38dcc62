use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ConsultationData;
use crate::domain::consultation::models::CreateConsultationCommand;
use crate::domain::consultation::ports::ConsultationServicePort;
use crate::domain::user::ports::EmailSender;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_consultation<M: EmailSender>(
    State(state): State<AppState<M>>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Json(body): Json<CreateConsultationRequestBody>,
) -> Result<ApiSuccess<ConsultationData>, ApiError> {
    let command = CreateConsultationCommand::new(
        body.age,
        body.height,
        body.weight,
        body.blood_type,
        body.symptoms,
    )
    .map_err(ApiError::from)?;

    state
        .consultation_service
        .create_consultation(authenticated.user.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref consultation| ApiSuccess::new(StatusCode::CREATED, consultation.into()))
}

/// HTTP request body for submitting a consultation (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateConsultationRequestBody {
    age: i32,
    height: i32,
    weight: i32,
    blood_type: Option<String>,
    symptoms: String,
}
