use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::MedicineData;
use crate::domain::pharmacy::ports::PharmacyServicePort;
use crate::domain::user::ports::EmailSender;
use crate::inbound::http::router::AppState;

/// The catalog is public; browsing needs no account.
pub async fn list_medicines<M: EmailSender>(
    State(state): State<AppState<M>>,
) -> Result<ApiSuccess<Vec<MedicineData>>, ApiError> {
    state
        .pharmacy_service
        .list_medicines()
        .await
        .map_err(ApiError::from)
        .map(|medicines| {
            ApiSuccess::new(
                StatusCode::OK,
                medicines.iter().map(MedicineData::from).collect(),
            )
        })
}
