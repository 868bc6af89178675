use crate::app::users::User;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Returns a fresh 128-bit random session id in UUID layout
/// (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, lowercase hex).
pub fn generate_session_id() -> String {
    let hex = format!("{:032x}", rand::random::<u128>());
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// A logged-in browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
    user: User,
}

impl Session {
    pub fn new(id: impl Into<String>, user: User) -> Self {
        Self {
            id: id.into(),
            user,
        }
    }

    /// Creates a session for `user` under a newly generated id.
    pub fn for_user(user: User) -> Self {
        Self::new(generate_session_id(), user)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The user who authenticated this session.
    pub fn user(&self) -> &User {
        &self.user
    }
}

/// Process-wide session table.
///
/// Cloning is cheap and every clone shares the same table, so one store is
/// created at startup and handed to each connection.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a session under its id.
    ///
    /// Ids are expected to be unique; the caller generates them.
    pub async fn create(&self, session: Session) {
        let mut sessions = self.sessions.write().await;
        let id = session.id.clone();

        if sessions.insert(id, session).is_some() {
            tracing::warn!("Session id collision, previous session replaced");
        }
    }

    /// Looks up a session by id.
    pub async fn find(&self, id: &str) -> Option<Session> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
