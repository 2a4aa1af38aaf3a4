//! In-memory session store.
//!
//! Uses `DashMap` for concurrent access without external locks. Records never
//! expire; they live until revoked or the process exits.

use async_trait::async_trait;
use dashmap::DashMap;

use super::{SessionStore, generate_token};

/// Process-local session store.
///
/// Sessions are lost on restart and not shared across processes.
#[derive(Default)]
pub struct InMemoryStore {
    sessions: DashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemoryStore {
    async fn issue(&self, username: &str) -> String {
        // 128 random bits; collisions are not checked for.
        let token = generate_token();
        self.sessions.insert(token.clone(), username.to_string());
        token
    }

    async fn validate(&self, token: &str) -> Option<String> {
        if token.is_empty() {
            return None;
        }
        self.sessions.get(token).map(|entry| entry.value().clone())
    }

    async fn revoke(&self, token: &str) {
        self.sessions.remove(token);
    }
}
