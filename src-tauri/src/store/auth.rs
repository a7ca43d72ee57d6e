//! Store Layer - Magic Code Auth
//!
//! Sign-in is delegated to the remote store: the user receives a code by
//! email and exchanges it for a session. In offline mode (no store URL) any
//! code signs in a local user so the app stays usable without the service.

use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{DomainError, DomainResult};

use super::session::{AuthUser, Session, SessionState};

pub struct AuthClient {
    http: reqwest::Client,
    /// None = offline mode
    base_url: Option<String>,
    session: Arc<SessionState>,
}

#[derive(Deserialize)]
struct VerifyResponse {
    #[serde(rename = "userId")]
    user_id: String,
    token: String,
}

impl AuthClient {
    pub fn new(base_url: Option<String>, session: Arc<SessionState>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    pub async fn send_magic_code(&self, email: &str) -> DomainResult<()> {
        let email = email.trim();
        if email.is_empty() {
            return Err(DomainError::InvalidInput("email is empty".into()));
        }
        let Some(base) = &self.base_url else {
            info!("offline mode: skipping magic code email for {}", email);
            return Ok(());
        };
        let response = self
            .http
            .post(format!("{}/auth/send_magic_code", base.trim_end_matches('/')))
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("send_magic_code failed: {}", e)))?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("send_magic_code rejected: {} {}", status, body);
            return Err(DomainError::Unauthorized(format!("could not send code: {}", status)));
        }
        Ok(())
    }

    pub async fn verify_magic_code(&self, email: &str, code: &str) -> DomainResult<AuthUser> {
        let Some(base) = &self.base_url else {
            let user = AuthUser {
                id: format!("local-{}", email.trim().to_lowercase()),
                email: email.trim().to_string(),
            };
            self.session
                .set(Session { user: user.clone(), token: "offline".into() })
                .await;
            return Ok(user);
        };
        let response = self
            .http
            .post(format!("{}/auth/verify_magic_code", base.trim_end_matches('/')))
            .json(&json!({ "email": email, "code": code }))
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("verify_magic_code failed: {}", e)))?;
        if !response.status().is_success() {
            return Err(DomainError::Unauthorized("invalid magic code".into()));
        }
        let verified: VerifyResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Upstream(format!("malformed verify response: {}", e)))?;
        let user = AuthUser {
            id: verified.user_id,
            email: email.trim().to_string(),
        };
        self.session
            .set(Session { user: user.clone(), token: verified.token })
            .await;
        Ok(user)
    }

    pub async fn sign_out(&self) {
        self.session.clear().await;
    }

    pub async fn current_user(&self) -> Option<AuthUser> {
        self.session.user().await
    }
}
