//! Server-side session storage.
//!
//! Provides the `SessionStore` trait for pluggable storage, token generation,
//! an in-memory store, and the request-side token extraction and cookie
//! formatting used by the HTTP layer.

pub mod extract;
pub mod memory;

use async_trait::async_trait;
use rand::Rng;

/// Random bytes per session token (128 bits).
pub const TOKEN_BYTES: usize = 16;

/// Pluggable session storage.
///
/// A token is valid exactly while it is a key in the store. Implementations
/// must be `Send + Sync` so one instance can be shared across handlers.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Generate a fresh token, bind it to `username`, and return it.
    async fn issue(&self, username: &str) -> String;

    /// Username bound to `token`, or `None` if the token is unknown.
    async fn validate(&self, token: &str) -> Option<String>;

    /// Forget `token`. Unknown tokens are ignored.
    async fn revoke(&self, token: &str);
}

/// Generate an opaque session token: 16 CSPRNG bytes, lowercase hex.
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::thread_rng().r#gen();
    hex::encode(bytes)
}
