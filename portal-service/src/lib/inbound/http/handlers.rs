use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::consultation::errors::ConsultationError;
use crate::domain::consultation::models::Consultation;
use crate::domain::pharmacy::errors::PharmacyError;
use crate::domain::pharmacy::models::Medicine;
use crate::domain::pharmacy::models::Order;
use crate::user::errors::AuthError;

pub mod create_consultation;
pub mod create_order;
pub mod current_user;
pub mod forgot_password;
pub mod list_consultations;
pub mod list_medicines;
pub mod list_orders;
pub mod login;
pub mod logout;
pub mod register;
pub mod reset_password;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            // Conflict bodies keep their historical wording and hide the
            // offending value
            AuthError::UsernameAlreadyExists(_) => {
                ApiError::BadRequest("Username already exists".to_string())
            }
            AuthError::EmailAlreadyExists(_) => {
                ApiError::BadRequest("Email already exists".to_string())
            }
            AuthError::InvalidCredentials | AuthError::Unauthenticated => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::EmailNotFound(_) => ApiError::BadRequest("Email not found".to_string()),
            AuthError::InvalidResetToken => ApiError::BadRequest(err.to_string()),
            AuthError::EmailDelivery(_) => {
                ApiError::InternalServerError("Error sending password reset email".to_string())
            }
            AuthError::InvalidUsername(_) | AuthError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            AuthError::Password(_) | AuthError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ConsultationError> for ApiError {
    fn from(err: ConsultationError) -> Self {
        match err {
            ConsultationError::AgeOutOfRange { .. }
            | ConsultationError::HeightOutOfRange { .. }
            | ConsultationError::WeightOutOfRange { .. }
            | ConsultationError::SymptomsLength { .. } => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            ConsultationError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<PharmacyError> for ApiError {
    fn from(err: PharmacyError) -> Self {
        match err {
            PharmacyError::QuantityOutOfRange { .. } => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            PharmacyError::MedicineNotFound(_) => {
                ApiError::NotFound("Medicine not found".to_string())
            }
            PharmacyError::OutOfStock(_) => {
                ApiError::BadRequest("Medicine is out of stock".to_string())
            }
            PharmacyError::PrescriptionRequired => {
                ApiError::BadRequest("Prescription required".to_string())
            }
            PharmacyError::InvalidPrice(_) | PharmacyError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsultationData {
    pub id: i64,
    pub user_id: i64,
    pub age: i32,
    pub height: i32,
    pub weight: i32,
    pub blood_type: Option<String>,
    pub symptoms: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Consultation> for ConsultationData {
    fn from(consultation: &Consultation) -> Self {
        Self {
            id: consultation.id.0,
            user_id: consultation.user_id.0,
            age: consultation.age,
            height: consultation.height,
            weight: consultation.weight,
            blood_type: consultation.blood_type.clone(),
            symptoms: consultation.symptoms.clone(),
            status: consultation.status.clone(),
            created_at: consultation.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicineData {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub dosage: String,
    pub price: String,
    pub requires_prescription: bool,
    pub in_stock: bool,
}

impl From<&Medicine> for MedicineData {
    fn from(medicine: &Medicine) -> Self {
        Self {
            id: medicine.id.0,
            name: medicine.name.clone(),
            description: medicine.description.clone(),
            dosage: medicine.dosage.clone(),
            price: medicine.price.clone(),
            requires_prescription: medicine.requires_prescription,
            in_stock: medicine.in_stock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderData {
    pub id: i64,
    pub user_id: i64,
    pub medicine_id: i64,
    pub quantity: i32,
    pub total_price: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderData {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.0,
            user_id: order.user_id.0,
            medicine_id: order.medicine_id.0,
            quantity: order.quantity,
            total_price: order.total_price.clone(),
            status: order.status.clone(),
            created_at: order.created_at,
        }
    }
}
