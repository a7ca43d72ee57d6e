//! Store Layer - Session State
//!
//! Holds the signed-in user for the lifetime of the app. Shared between the
//! auth client (which writes it) and the record client (which reads the
//! bearer token). Explicitly constructed at startup, never a process-wide
//! global.

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub user: AuthUser,
    pub token: String,
}

#[derive(Default)]
pub struct SessionState {
    current: Mutex<Option<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, session: Session) {
        *self.current.lock().await = Some(session);
    }

    pub async fn clear(&self) {
        *self.current.lock().await = None;
    }

    pub async fn user(&self) -> Option<AuthUser> {
        self.current.lock().await.as_ref().map(|s| s.user.clone())
    }

    pub async fn token(&self) -> Option<String> {
        self.current.lock().await.as_ref().map(|s| s.token.clone())
    }
}
