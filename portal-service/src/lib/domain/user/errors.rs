use thiserror::Error;

/// Username validation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must be minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
    #[error("Username must be maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
    #[error("Username must contain only alphanumeric characters, underscores, and hyphens")]
    InvalidCharacters,
}

/// Email validation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email address is invalid: {0}")]
    InvalidFormat(String),
}

/// Errors raised by the mailer port.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailSenderError {
    #[error("Failed to send email: {0}")]
    SendFailed(String),
}

/// Authentication and account lifecycle errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    InvalidUsername(#[from] UsernameError),
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),
    #[error(transparent)]
    Password(#[from] auth::PasswordError),
    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),
    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Email not found: {0}")]
    EmailNotFound(String),
    #[error("Invalid or expired password reset token")]
    InvalidResetToken,
    #[error(transparent)]
    EmailDelivery(#[from] EmailSenderError),
    #[error("Internal error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError::Unknown(err.to_string())
    }
}
