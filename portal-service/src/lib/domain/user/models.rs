use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::EmailError;
use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// Represents a registered patient account
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// User unique identifier type
///
/// Identifiers are assigned by the store, monotonically from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Accepts 3-32 characters drawn from letters, digits, underscore, and hyphen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 32;

    /// Parse and validate a raw username.
    ///
    /// Length is checked before the character set.
    ///
    /// # Arguments
    /// * `username` - Raw username string
    ///
    /// # Returns
    /// Validated Username value object
    ///
    /// # Errors
    /// * `TooShort` / `TooLong` - Length outside 3-32 characters
    /// * `InvalidCharacters` - Anything besides letters, digits, `_`, `-`
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.len();
        if length < Self::MIN_LENGTH {
            return Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        let chars_valid = username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-');
        if !chars_valid {
            return Err(UsernameError::InvalidCharacters);
        }

        Ok(Self(username))
    }

    /// Borrow the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Wraps the raw string once it parses as RFC 5322.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and validate a raw email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not parse as RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        match email_address::EmailAddress::from_str(&email) {
            Ok(_) => Ok(Self(email)),
            Err(e) => Err(EmailError::InvalidFormat(e.to_string())),
        }
    }

    /// Borrow the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// New user record handed to the repository, which assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be hashed by service)
    ///
    /// # Returns
    /// RegisterCommand with validated fields
    pub fn new(username: Username, email: EmailAddress, password: String) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Password reset token entity.
///
/// Valid until `expires_at`; deleted on first successful use.
#[derive(Debug, Clone)]
pub struct PasswordResetToken {
    pub id: i64,
    pub user_id: UserId,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// New reset token record handed to the repository.
#[derive(Debug, Clone)]
pub struct NewPasswordResetToken {
    pub user_id: UserId,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Outbound email payload handed to the mailer port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: EmailAddress,
    pub subject: String,
    pub html_body: String,
}

impl EmailMessage {
    /// Compose the password-reset email for `recipient`.
    ///
    /// # Arguments
    /// * `recipient` - Address the reset was requested for
    /// * `reset_url` - Link embedding the raw reset token
    pub fn password_reset(recipient: EmailAddress, reset_url: &str) -> Self {
        let html_body = format!(
            "<p>You requested a password reset</p>\n\
             <p>Click this <a href=\"{reset_url}\">link</a> to reset your password</p>\n\
             <p>If you didn't request this, please ignore this email</p>\n\
             <p>This link will expire in 1 hour</p>"
        );

        Self {
            to: recipient,
            subject: "Password Reset Request".to_string(),
            html_body,
        }
    }
}
