use async_trait::async_trait;

use crate::user::errors::AuthError;
use crate::user::errors::EmailSenderError;
use crate::user::models::EmailMessage;
use crate::user::models::NewPasswordResetToken;
use crate::user::models::NewUser;
use crate::user::models::PasswordResetToken;
use crate::user::models::RegisterCommand;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::models::Username;

/// Port for authentication and account lifecycle operations.
///
/// Defines the core use cases: registration, session-based login,
/// and the password-reset-by-email flow.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user account and open a session for it.
    ///
    /// # Arguments
    /// * `command` - Validated registration data
    ///
    /// # Returns
    /// The created user together with a fresh session id
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is taken
    /// * `EmailAlreadyExists` - Email is taken
    /// * `Unknown` - Unexpected internal error
    async fn register(&self, command: RegisterCommand) -> Result<(User, String), AuthError>;

    /// Authenticate a user by username and password.
    ///
    /// # Arguments
    /// * `username` - Username to authenticate
    /// * `password` - Plain text password to verify
    ///
    /// # Returns
    /// The authenticated user together with a fresh session id
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Unknown` - Unexpected internal error
    async fn login(
        &self,
        username: &Username,
        password: String,
    ) -> Result<(User, String), AuthError>;

    /// Terminate the session with the given id.
    ///
    /// Unknown or already-expired session ids are ignored.
    ///
    /// # Arguments
    /// * `session_id` - Session to destroy
    async fn logout(&self, session_id: &str);

    /// Resolve the user owning an active session.
    ///
    /// # Arguments
    /// * `session_id` - Session id presented by the client
    ///
    /// # Returns
    /// The user the session belongs to
    ///
    /// # Errors
    /// * `Unauthenticated` - Session is unknown, expired, or orphaned
    async fn current_user(&self, session_id: &str) -> Result<User, AuthError>;

    /// Begin the password-reset flow for an email address.
    ///
    /// Issues a single-use token valid for one hour and emails a reset
    /// link to the address.
    ///
    /// # Arguments
    /// * `email` - Address the reset was requested for
    ///
    /// # Errors
    /// * `EmailNotFound` - No account with that email
    /// * `EmailDelivery` - Reset email could not be sent
    /// * `Unknown` - Unexpected internal error
    async fn forgot_password(&self, email: &str) -> Result<(), AuthError>;

    /// Complete the password-reset flow with a previously issued token.
    ///
    /// The token is consumed on success and cannot be used again.
    ///
    /// # Arguments
    /// * `token` - Raw token from the reset link
    /// * `new_password` - Replacement password
    ///
    /// # Errors
    /// * `InvalidResetToken` - Token is unknown or expired
    /// * `Unknown` - Unexpected internal error
    async fn reset_password(&self, token: &str, new_password: String) -> Result<(), AuthError>;
}

/// Repository port for user accounts and password-reset tokens.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user, assigning its id.
    ///
    /// # Arguments
    /// * `user` - User record without an id
    ///
    /// # Returns
    /// The stored user with its assigned id
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is taken
    /// * `EmailAlreadyExists` - Email is taken
    async fn create_user(&self, user: NewUser) -> Result<User, AuthError>;

    /// Find a user by id.
    ///
    /// # Arguments
    /// * `id` - User id to look up
    ///
    /// # Returns
    /// The user if one exists
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;

    /// Find a user by username.
    ///
    /// # Arguments
    /// * `username` - Username to look up
    ///
    /// # Returns
    /// The user if one exists
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError>;

    /// Find a user by email address.
    ///
    /// # Arguments
    /// * `email` - Email to look up
    ///
    /// # Returns
    /// The user if one exists
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Replace the password hash of a user.
    ///
    /// Unknown user ids are ignored.
    ///
    /// # Arguments
    /// * `id` - User whose password changes
    /// * `password_hash` - New password hash
    async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), AuthError>;

    /// Persist a new password-reset token, assigning its id.
    ///
    /// # Arguments
    /// * `token` - Token record without an id
    ///
    /// # Returns
    /// The stored token with its assigned id
    async fn create_reset_token(
        &self,
        token: NewPasswordResetToken,
    ) -> Result<PasswordResetToken, AuthError>;

    /// Find a password-reset token by its raw token string.
    ///
    /// # Arguments
    /// * `token` - Raw token from the reset link
    ///
    /// # Returns
    /// The token record if one exists
    async fn find_reset_token(&self, token: &str) -> Result<Option<PasswordResetToken>, AuthError>;

    /// Delete a password-reset token by its raw token string.
    ///
    /// Unknown tokens are ignored.
    ///
    /// # Arguments
    /// * `token` - Raw token to delete
    async fn delete_reset_token(&self, token: &str) -> Result<(), AuthError>;
}

/// Port for outbound email delivery.
#[async_trait]
pub trait EmailSender: Send + Sync + 'static {
    /// Send an email message.
    ///
    /// # Arguments
    /// * `message` - Message to deliver
    ///
    /// # Errors
    /// * `SendFailed` - Transport rejected or failed to deliver the message
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailSenderError>;
}
