use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::ConsultationData;
use crate::domain::consultation::ports::ConsultationServicePort;
use crate::domain::user::ports::EmailSender;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_consultations<M: EmailSender>(
    State(state): State<AppState<M>>,
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<ConsultationData>>, ApiError> {
    state
        .consultation_service
        .list_for_user(&authenticated.user.id)
        .await
        .map_err(ApiError::from)
        .map(|consultations| {
            ApiSuccess::new(
                StatusCode::OK,
                consultations.iter().map(ConsultationData::from).collect(),
            )
        })
}
