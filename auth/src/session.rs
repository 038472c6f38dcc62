use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use tokio::sync::RwLock;

use crate::token::generate_token;

/// Default session lifetime (24 hours).
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// A single authenticated session bound to a principal.
#[derive(Debug, Clone)]
struct Session<T> {
    principal: T,
    expires_at: Instant,
}

/// In-memory store binding opaque session identifiers to principals.
///
/// Identifiers are generated from OS entropy and are unguessable. Expired
/// sessions are dropped on lookup; callers that want the map swept
/// proactively run [`SessionStore::purge_expired`] on an interval.
///
/// Cloning is cheap and clones share the same underlying map.
#[derive(Debug, Clone)]
pub struct SessionStore<T> {
    sessions: Arc<RwLock<HashMap<String, Session<T>>>>,
    ttl: Duration,
}

impl<T> SessionStore<T>
where
    T: Clone + Send + Sync,
{
    /// Create a new session store.
    ///
    /// # Arguments
    /// * `ttl` - Lifetime granted to each session at creation
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Create a session for `principal`.
    ///
    /// A principal may hold any number of simultaneous sessions.
    ///
    /// # Returns
    /// The opaque session identifier to hand to the client
    pub async fn create(&self, principal: T) -> String {
        let session_id = generate_token();
        let session = Session {
            principal,
            expires_at: Instant::now() + self.ttl,
        };

        self.sessions
            .write()
            .await
            .insert(session_id.clone(), session);

        session_id
    }

    /// Resolve a session identifier to its principal.
    ///
    /// # Returns
    /// The bound principal, or None if the session is unknown or expired.
    /// An expired session is removed from the map as a side effect.
    pub async fn get(&self, session_id: &str) -> Option<T> {
        let expired = {
            let sessions = self.sessions.read().await;
            match sessions.get(session_id) {
                Some(session) if session.expires_at > Instant::now() => {
                    return Some(session.principal.clone());
                }
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            self.sessions.write().await.remove(session_id);
        }

        None
    }

    /// Destroy a session.
    ///
    /// # Returns
    /// True if a session was removed, false if none existed
    pub async fn destroy(&self, session_id: &str) -> bool {
        self.sessions.write().await.remove(session_id).is_some()
    }

    /// Drop every expired session.
    ///
    /// # Returns
    /// Number of sessions removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, session| session.expires_at > now);

        before - sessions.len()
    }

    /// Number of sessions currently held, including not-yet-purged expired
    /// ones.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl<T> Default for SessionStore<T>
where
    T: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}
