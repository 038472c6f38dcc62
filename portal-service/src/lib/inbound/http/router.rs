use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_consultation::create_consultation;
use super::handlers::create_order::create_order;
use super::handlers::current_user::current_user;
use super::handlers::forgot_password::forgot_password;
use super::handlers::list_consultations::list_consultations;
use super::handlers::list_medicines::list_medicines;
use super::handlers::list_orders::list_orders;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::register::register;
use super::handlers::reset_password::reset_password;
use super::middleware::authenticate as auth_middleware;
use crate::domain::consultation::service::ConsultationService;
use crate::domain::pharmacy::service::PharmacyService;
use crate::domain::user::ports::EmailSender;
use crate::domain::user::service::AuthService;
use crate::outbound::repositories::InMemoryConsultationRepository;
use crate::outbound::repositories::InMemoryMedicineRepository;
use crate::outbound::repositories::InMemoryOrderRepository;
use crate::outbound::repositories::InMemoryUserRepository;

/// Shared handler state, generic over the outbound mailer. Tests
/// substitute a recording fake for the SMTP transport.
pub struct AppState<M>
where
    M: EmailSender,
{
    pub auth_service: Arc<AuthService<InMemoryUserRepository, M>>,
    pub consultation_service: Arc<ConsultationService<InMemoryConsultationRepository>>,
    pub pharmacy_service: Arc<PharmacyService<InMemoryMedicineRepository, InMemoryOrderRepository>>,
}

impl<M> Clone for AppState<M>
where
    M: EmailSender,
{
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            consultation_service: Arc::clone(&self.consultation_service),
            pharmacy_service: Arc::clone(&self.pharmacy_service),
        }
    }
}

pub fn create_router<M: EmailSender>(
    auth_service: Arc<AuthService<InMemoryUserRepository, M>>,
    consultation_service: Arc<ConsultationService<InMemoryConsultationRepository>>,
    pharmacy_service: Arc<PharmacyService<InMemoryMedicineRepository, InMemoryOrderRepository>>,
) -> Router {
    let state = AppState {
        auth_service,
        consultation_service,
        pharmacy_service,
    };

    // Logout is reachable without a live session; it still clears the cookie
    let public_routes = Router::new()
        .route("/api/register", post(register::<M>))
        .route("/api/login", post(login::<M>))
        .route("/api/logout", post(logout::<M>))
        .route("/api/forgot-password", post(forgot_password::<M>))
        .route("/api/reset-password/:token", post(reset_password::<M>))
        .route("/api/medicines", get(list_medicines::<M>));

    let protected_routes = Router::new()
        .route("/api/user", get(current_user))
        .route("/api/consultations", post(create_consultation::<M>))
        .route("/api/consultations", get(list_consultations::<M>))
        .route("/api/orders", post(create_order::<M>))
        .route("/api/orders", get(list_orders::<M>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<M>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                headers = ?request.headers(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
