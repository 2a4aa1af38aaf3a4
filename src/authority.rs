//! Session issuance and validation.
//!
//! `SessionAuthority` pairs a `CredentialVerifier` with a `SessionStore`.
//! Handlers only see the two outcomes in `AuthError`; malformed, unknown and
//! empty tokens are indistinguishable to callers.

use async_trait::async_trait;
use std::sync::Arc;

use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("credentials rejected")]
    Rejected,

    #[error("unauthorized")]
    Unauthorized,
}

/// Decides whether a username/password pair may open a session.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> bool;
}

/// Stand-in until the gateway login call exists: any pair with both fields
/// non-empty is accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderVerifier;

#[async_trait]
impl CredentialVerifier for PlaceholderVerifier {
    async fn verify(&self, username: &str, password: &str) -> bool {
        !username.is_empty() && !password.is_empty()
    }
}

/// Issues and validates session tokens.
#[derive(Clone)]
pub struct SessionAuthority {
    verifier: Arc<dyn CredentialVerifier>,
    sessions: Arc<dyn SessionStore>,
}

impl SessionAuthority {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { verifier, sessions }
    }

    /// Check credentials and, on success, open a session for `username`.
    pub async fn issue(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if !self.verifier.verify(username, password).await {
            return Err(AuthError::Rejected);
        }
        Ok(self.sessions.issue(username).await)
    }

    /// Resolve a presented token to the username that obtained it.
    pub async fn validate(&self, presented: Option<&str>) -> Result<String, AuthError> {
        let token = presented.ok_or(AuthError::Unauthorized)?;
        self.sessions
            .validate(token)
            .await
            .ok_or(AuthError::Unauthorized)
    }

    /// Underlying store, for revocation and inspection.
    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }
}
