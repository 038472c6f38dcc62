use std::sync::Arc;
use std::time::Duration;

use auth::SessionStore;
use portal_service::config::Config;
use portal_service::consultation::service::ConsultationService;
use portal_service::inbound::http::router::create_router;
use portal_service::outbound::email::SmtpEmailSender;
use portal_service::outbound::repositories::InMemoryConsultationRepository;
use portal_service::outbound::repositories::InMemoryMedicineRepository;
use portal_service::outbound::repositories::InMemoryOrderRepository;
use portal_service::outbound::repositories::InMemoryUserRepository;
use portal_service::pharmacy::service::PharmacyService;
use portal_service::user::service::AuthService;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// How often the background sweep drops expired sessions.
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "portal-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        public_url = %config.server.public_url,
        session_ttl_hours = config.session.ttl_hours,
        smtp_host = %config.smtp.host,
        smtp_port = config.smtp.port,
        "Configuration loaded"
    );

    let sessions = SessionStore::new(Duration::from_secs(config.session.ttl_hours * 60 * 60));
    let purge_sessions = sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let removed = purge_sessions.purge_expired().await;
            if removed > 0 {
                tracing::debug!(removed, "Purged expired sessions");
            }
        }
    });

    let user_repository = Arc::new(InMemoryUserRepository::new());
    let consultation_repository = Arc::new(InMemoryConsultationRepository::new());
    let medicine_repository = Arc::new(InMemoryMedicineRepository::with_default_catalog());
    let order_repository = Arc::new(InMemoryOrderRepository::new());
    tracing::info!(storage = "in-memory", "Repositories initialized");

    let mailer = Arc::new(SmtpEmailSender::new(&config.smtp)?);

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        mailer,
        sessions,
        config.server.public_url.clone(),
    ));
    let consultation_service = Arc::new(ConsultationService::new(consultation_repository));
    let pharmacy_service = Arc::new(PharmacyService::new(medicine_repository, order_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, consultation_service, pharmacy_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
