use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use auth::SessionStore;
use portal_service::consultation::service::ConsultationService;
use portal_service::inbound::http::router::create_router;
use portal_service::outbound::repositories::InMemoryConsultationRepository;
use portal_service::outbound::repositories::InMemoryMedicineRepository;
use portal_service::outbound::repositories::InMemoryOrderRepository;
use portal_service::outbound::repositories::InMemoryUserRepository;
use portal_service::pharmacy::service::PharmacyService;
use portal_service::user::errors::EmailSenderError;
use portal_service::user::models::EmailMessage;
use portal_service::user::ports::EmailSender;
use portal_service::user::service::AuthService;
use serde_json::json;

/// Mailer double that records every message instead of delivering it.
pub struct RecordingMailer {
    messages: Mutex<Vec<EmailMessage>>,
    fail_sends: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail_sends: false,
        }
    }

    /// A mailer whose sends always fail, for exercising delivery errors.
    pub fn failing() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail_sends: true,
        }
    }

    pub fn messages(&self) -> Vec<EmailMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailSenderError> {
        if self.fail_sends {
            return Err(EmailSenderError::SendFailed(
                "simulated relay failure".to_string(),
            ));
        }

        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub mailer: Arc<RecordingMailer>,
    pub user_repository: Arc<InMemoryUserRepository>,
    pub medicine_repository: Arc<InMemoryMedicineRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_mailer(RecordingMailer::new()).await
    }

    /// Spawn the application with a mailer that fails every send
    pub async fn spawn_with_failing_mailer() -> Self {
        Self::spawn_with_mailer(RecordingMailer::failing()).await
    }

    async fn spawn_with_mailer(mailer: RecordingMailer) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let mailer = Arc::new(mailer);
        let user_repository = Arc::new(InMemoryUserRepository::new());
        let consultation_repository = Arc::new(InMemoryConsultationRepository::new());
        let medicine_repository = Arc::new(InMemoryMedicineRepository::with_default_catalog());
        let order_repository = Arc::new(InMemoryOrderRepository::new());

        let sessions = SessionStore::new(Duration::from_secs(60 * 60));

        // Reset links point back at this test server
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            Arc::clone(&mailer),
            sessions,
            address.clone(),
        ));
        let consultation_service = Arc::new(ConsultationService::new(consultation_repository));
        let pharmacy_service = Arc::new(PharmacyService::new(
            Arc::clone(&medicine_repository),
            order_repository,
        ));

        let router = create_router(auth_service, consultation_service, pharmacy_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
            mailer,
            user_repository,
            medicine_repository,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Register an account; the shared client keeps the session cookie.
    pub async fn register_user(&self, username: &str, email: &str, password: &str) {
        let response = self
            .post("/api/register")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    }

    /// Extract the raw reset token from the most recently recorded email.
    pub fn last_reset_token(&self) -> String {
        let messages = self.mailer.messages();
        let message = messages.last().expect("No reset email was recorded");

        let (_, tail) = message
            .html_body
            .split_once("/reset-password/")
            .expect("Reset email does not contain a reset link");

        tail.chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect()
    }
}
