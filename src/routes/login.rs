//! POST /api/login

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{AppendHeaders, IntoResponse};
use std::sync::Arc;

use crate::error::AppError;
use crate::ocsf;
use crate::session::extract::make_set_cookie;
use crate::types::{LoginRequest, LoginResponse};

/// Exchange credentials for a session token, returned in the body and as a cookie.
///
/// The body is only read when declared as JSON. Anything else, including a
/// JSON body of the wrong shape, counts as empty credentials and is rejected
/// by the verifier.
pub async fn login(
    State(state): State<Arc<crate::AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let creds = read_credentials(&headers, &body);

    match state.authority.issue(&creds.username, &creds.password).await {
        Ok(token) => {
            ocsf::logon_event(true, &creds.username);
            let cookie = make_set_cookie(&token, state.config.session_https_only);
            Ok((
                AppendHeaders([(header::SET_COOKIE, cookie)]),
                Json(LoginResponse { ok: true, token }),
            ))
        }
        Err(e) => {
            ocsf::logon_event(false, &creds.username);
            Err(e.into())
        }
    }
}

fn read_credentials(headers: &HeaderMap, body: &[u8]) -> LoginRequest {
    if !is_json_content_type(headers) {
        tracing::debug!("login body not declared as JSON");
        return LoginRequest::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!("unreadable login body: {}", e);
        LoginRequest::default()
    })
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
