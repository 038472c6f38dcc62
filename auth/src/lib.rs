//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (scrypt)
//! - Cryptographically random opaque tokens
//! - In-memory session tracking with expiry
//!
//! Each service defines its own authentication traits and adapts these implementations.
//! This avoids coupling services through shared domain logic while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Opaque Tokens
//! ```
//! use auth::generate_token;
//!
//! let token = generate_token();
//! assert_eq!(token.len(), 43);
//! ```
//!
//! ## Sessions
//! ```
//! use std::time::Duration;
//! use auth::SessionStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let sessions: SessionStore<i64> = SessionStore::new(Duration::from_secs(3600));
//!
//! // Login: bind a session to the user's id
//! let session_id = sessions.create(42).await;
//!
//! // Subsequent requests: resolve the identifier back to the user
//! assert_eq!(sessions.get(&session_id).await, Some(42));
//!
//! // Logout
//! sessions.destroy(&session_id).await;
//! assert_eq!(sessions.get(&session_id).await, None);
//! # }
//! ```

pub mod password;
pub mod session;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::SessionStore;
pub use session::DEFAULT_SESSION_TTL;
pub use token::generate_token;
pub use token::TOKEN_BYTES;
