use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::user::errors::AuthError;
use crate::user::models::NewPasswordResetToken;
use crate::user::models::NewUser;
use crate::user::models::PasswordResetToken;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::models::Username;
use crate::user::ports::UserRepository;

/// In-memory implementation of UserRepository.
///
/// Users are keyed by id, reset tokens by their raw token string. Ids are
/// handed out from atomic counters starting at 1. Everything is lost on
/// process exit.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
    tokens: RwLock<HashMap<String, PasswordResetToken>>,
    next_user_id: AtomicI64,
    next_token_id: AtomicI64,
}

impl InMemoryUserRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            tokens: RwLock::new(HashMap::new()),
            next_user_id: AtomicI64::new(1),
            next_token_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: NewUser) -> Result<User, AuthError> {
        let mut users = self.users.write().await;

        // Uniqueness is re-checked under the write lock; the service's
        // earlier lookups ran outside it
        if users.values().any(|e| e.username == user.username) {
            return Err(AuthError::UsernameAlreadyExists(user.username.to_string()));
        }
        if users.values().any(|e| e.email == user.email) {
            return Err(AuthError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        let id = UserId(self.next_user_id.fetch_add(1, Ordering::Relaxed));
        let user = User {
            id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
        };
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.username == *username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }

    async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), AuthError> {
        // Unknown ids are a silent no-op
        if let Some(user) = self.users.write().await.get_mut(id) {
            user.password_hash = password_hash.to_string();
        }

        Ok(())
    }

    async fn create_reset_token(
        &self,
        token: NewPasswordResetToken,
    ) -> Result<PasswordResetToken, AuthError> {
        let record = PasswordResetToken {
            id: self.next_token_id.fetch_add(1, Ordering::Relaxed),
            user_id: token.user_id,
            token: token.token,
            expires_at: token.expires_at,
            created_at: Utc::now(),
        };

        self.tokens
            .write()
            .await
            .insert(record.token.clone(), record.clone());

        Ok(record)
    }

    async fn find_reset_token(&self, token: &str) -> Result<Option<PasswordResetToken>, AuthError> {
        Ok(self.tokens.read().await.get(token).cloned())
    }

    async fn delete_reset_token(&self, token: &str) -> Result<(), AuthError> {
        self.tokens.write().await.remove(token);
        Ok(())
    }
}
