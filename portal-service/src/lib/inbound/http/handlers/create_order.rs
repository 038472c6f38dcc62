use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::OrderData;
use crate::domain::pharmacy::models::CreateOrderCommand;
use crate::domain::pharmacy::models::MedicineId;
use crate::domain::pharmacy::ports::PharmacyServicePort;
use crate::domain::user::ports::EmailSender;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_order<M: EmailSender>(
    State(state): State<AppState<M>>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Json(body): Json<CreateOrderRequestBody>,
) -> Result<ApiSuccess<OrderData>, ApiError> {
    let command = CreateOrderCommand::new(MedicineId(body.medicine_id), body.quantity)
        .map_err(ApiError::from)?;

    state
        .pharmacy_service
        .place_order(authenticated.user.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref order| ApiSuccess::new(StatusCode::CREATED, order.into()))
}

/// HTTP request body for ordering a medicine (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateOrderRequestBody {
    medicine_id: i64,
    quantity: i32,
}
