use std::sync::Arc;

use async_trait::async_trait;
use auth::SessionStore;
use chrono::Duration;
use chrono::Utc;

use crate::domain::user::models::EmailMessage;
use crate::domain::user::models::NewPasswordResetToken;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::AuthError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::EmailSender;
use crate::user::ports::UserRepository;

/// Reset tokens stop working one hour after they are issued.
const RESET_TOKEN_VALIDITY_HOURS: i64 = 1;

/// Domain service implementation for authentication operations.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<R, M>
where
    R: UserRepository,
    M: EmailSender,
{
    repository: Arc<R>,
    mailer: Arc<M>,
    sessions: SessionStore<UserId>,
    password_hasher: auth::PasswordHasher,
    reset_base_url: String,
}

impl<R, M> AuthService<R, M>
where
    R: UserRepository,
    M: EmailSender,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User and reset-token persistence implementation
    /// * `mailer` - Outbound email implementation
    /// * `sessions` - Shared session store
    /// * `reset_base_url` - Public base URL reset links are built from
    ///
    /// # Returns
    /// Configured authentication service instance
    pub fn new(
        repository: Arc<R>,
        mailer: Arc<M>,
        sessions: SessionStore<UserId>,
        reset_base_url: String,
    ) -> Self {
        Self {
            repository,
            mailer,
            sessions,
            password_hasher: auth::PasswordHasher::new(),
            reset_base_url,
        }
    }

    /// Hash on the blocking pool; scrypt at these cost parameters would
    /// stall an async worker thread.
    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let hasher = self.password_hasher;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Unknown(format!("Password hashing task failed: {}", e)))??;

        Ok(password_hash)
    }

    async fn verify_password(
        &self,
        password: String,
        password_hash: String,
    ) -> Result<bool, AuthError> {
        let hasher = self.password_hasher;
        let password_matches =
            tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
                .await
                .map_err(|e| {
                    AuthError::Unknown(format!("Password verification task failed: {}", e))
                })??;

        Ok(password_matches)
    }
}

#[async_trait]
impl<R, M> AuthServicePort for AuthService<R, M>
where
    R: UserRepository,
    M: EmailSender,
{
    async fn register(&self, command: RegisterCommand) -> Result<(User, String), AuthError> {
        if let Some(existing) = self.repository.find_by_username(&command.username).await? {
            return Err(AuthError::UsernameAlreadyExists(
                existing.username.to_string(),
            ));
        }

        if let Some(existing) = self
            .repository
            .find_by_email(command.email.as_str())
            .await?
        {
            return Err(AuthError::EmailAlreadyExists(
                existing.email.as_str().to_string(),
            ));
        }

        let password_hash = self.hash_password(command.password).await?;

        let user = self
            .repository
            .create_user(NewUser {
                username: command.username,
                email: command.email,
                password_hash,
            })
            .await?;

        let session_id = self.sessions.create(user.id).await;

        Ok((user, session_id))
    }

    async fn login(
        &self,
        username: &Username,
        password: String,
    ) -> Result<(User, String), AuthError> {
        // Unknown username and wrong password collapse into one error;
        // the response never reveals which usernames exist.
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_matches = self
            .verify_password(password, user.password_hash.clone())
            .await?;
        if !password_matches {
            return Err(AuthError::InvalidCredentials);
        }

        let session_id = self.sessions.create(user.id).await;

        Ok((user, session_id))
    }

    async fn logout(&self, session_id: &str) {
        self.sessions.destroy(session_id).await;
    }

    async fn current_user(&self, session_id: &str) -> Result<User, AuthError> {
        let user_id = self
            .sessions
            .get(session_id)
            .await
            .ok_or(AuthError::Unauthenticated)?;

        self.repository
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::Unauthenticated)
    }

    async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AuthError::EmailNotFound(email.to_string()))?;

        let reset_token = self
            .repository
            .create_reset_token(NewPasswordResetToken {
                user_id: user.id,
                token: auth::generate_token(),
                expires_at: Utc::now() + Duration::hours(RESET_TOKEN_VALIDITY_HOURS),
            })
            .await?;

        let reset_url = format!(
            "{}/reset-password/{}",
            self.reset_base_url, reset_token.token
        );
        let message = EmailMessage::password_reset(user.email.clone(), &reset_url);

        if let Err(send_err) = self.mailer.send(&message).await {
            tracing::error!(
                "Failed to send password reset email for user {}: {}",
                user.id,
                send_err
            );

            // A token the user never received must not stay redeemable
            if let Err(e) = self.repository.delete_reset_token(&reset_token.token).await {
                tracing::error!(
                    "Failed to delete undelivered reset token for user {}: {}",
                    user.id,
                    e
                );
            }

            return Err(AuthError::EmailDelivery(send_err));
        }

        Ok(())
    }

    async fn reset_password(&self, token: &str, new_password: String) -> Result<(), AuthError> {
        let reset_token = self
            .repository
            .find_reset_token(token)
            .await?
            .ok_or(AuthError::InvalidResetToken)?;

        if reset_token.expires_at < Utc::now() {
            return Err(AuthError::InvalidResetToken);
        }

        let password_hash = self.hash_password(new_password).await?;

        self.repository
            .update_password(&reset_token.user_id, &password_hash)
            .await?;
        self.repository.delete_reset_token(token).await?;

        Ok(())
    }
}
