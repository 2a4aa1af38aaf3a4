//! Locating the presented session token on a request, and formatting the
//! session cookie on the way out.
//!
//! Token lookup is an ordered list of strategies. The cookie is consulted
//! first, then the `Authorization` header; the first non-empty candidate wins.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header;
use axum::http::request::Parts;
use std::sync::Arc;

use crate::error::AppError;
use crate::{AppState, ocsf};

pub const COOKIE_NAME: &str = "ibkr_session";
/// Advisory cookie lifetime. The server never expires the record itself.
pub const MAX_AGE_SECS: u64 = 4 * 3600;

const BEARER_PREFIX: &str = "Bearer ";

/// A place a client may put its session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// `Cookie: ibkr_session=<token>`
    Cookie,
    /// `Authorization: Bearer <token>`
    BearerHeader,
}

/// Lookup order; the cookie takes precedence over the header.
pub const EXTRACTION_ORDER: [TokenSource; 2] = [TokenSource::Cookie, TokenSource::BearerHeader];

impl TokenSource {
    /// Candidate token from this source, if present and non-empty.
    pub fn extract(&self, headers: &HeaderMap) -> Option<String> {
        let candidate = match self {
            TokenSource::Cookie => headers
                .get_all(header::COOKIE)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .find_map(|h| parse_cookie(h, COOKIE_NAME)),
            TokenSource::BearerHeader => headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.strip_prefix(BEARER_PREFIX).unwrap_or(v)),
        }?;

        let candidate = candidate.trim();
        (!candidate.is_empty()).then(|| candidate.to_string())
    }
}

/// Presented token, walking `EXTRACTION_ORDER`.
pub fn presented_token(headers: &HeaderMap) -> Option<String> {
    EXTRACTION_ORDER
        .iter()
        .find_map(|source| source.extract(headers))
}

/// Username behind a valid session token on the request.
///
/// Rejects with `AppError::Unauthorized` when no source yields a token or the
/// store does not know it.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

impl FromRequestParts<Arc<AppState>> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = presented_token(&parts.headers);
        match state.authority.validate(token.as_deref()).await {
            Ok(username) => Ok(AuthenticatedUser(username)),
            Err(err) => {
                tracing::debug!(token_present = token.is_some(), "session check failed");
                ocsf::token_rejected_event(token.is_some());
                Err(err.into())
            }
        }
    }
}

/// `Set-Cookie` value carrying a freshly issued token.
pub fn make_set_cookie(token: &str, https_only: bool) -> String {
    let mut parts = vec![
        format!("{}={}", COOKIE_NAME, token),
        format!("Max-Age={}", MAX_AGE_SECS),
        "Path=/".into(),
        "HttpOnly".into(),
        "SameSite=Lax".into(),
    ];
    if https_only {
        parts.push("Secure".into());
    }
    parts.join("; ")
}

/// Parse a specific cookie from a Cookie header value.
fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    for part in header.split(';') {
        let trimmed = part.trim();
        if let Some(value) = trimmed.strip_prefix(name)
            && let Some(value) = value.strip_prefix('=')
        {
            return Some(value);
        }
    }
    None
}
