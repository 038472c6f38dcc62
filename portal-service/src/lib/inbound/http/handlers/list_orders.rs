use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::OrderData;
use crate::domain::pharmacy::ports::PharmacyServicePort;
use crate::domain::user::ports::EmailSender;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_orders<M: EmailSender>(
    State(state): State<AppState<M>>,
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<OrderData>>, ApiError> {
    state
        .pharmacy_service
        .orders_for_user(&authenticated.user.id)
        .await
        .map_err(ApiError::from)
        .map(|orders| ApiSuccess::new(StatusCode::OK, orders.iter().map(OrderData::from).collect()))
}
