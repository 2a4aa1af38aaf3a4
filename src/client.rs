//! HTTP client for the two `/api` routes, used by the `ibkr-cli` binary.

use reqwest::StatusCode;
use serde_json::json;

use crate::types::LoginResponse;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Server answered with a non-success status; `body` is the raw response text.
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("login response did not contain a token")]
    MissingToken,

    #[error("unexpected response body: {0}")]
    UnexpectedBody(String),
}

/// Thin wrapper over `reqwest::Client` bound to an API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_base: String,
}

impl ApiClient {
    /// `api_base` is the `/api` prefix, e.g. `http://127.0.0.1:5000/api`.
    /// Trailing slashes are dropped.
    pub fn new(api_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// POST credentials and return the issued token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ClientError> {
        let resp = self
            .http
            .post(format!("{}/login", self.api_base))
            .json(&json!({"username": username, "password": password}))
            .send()
            .await?;

        let body = success_body(resp).await?;
        let parsed: LoginResponse =
            serde_json::from_str(&body).map_err(|_| ClientError::MissingToken)?;
        if parsed.token.is_empty() {
            return Err(ClientError::MissingToken);
        }
        Ok(parsed.token)
    }

    /// GET the portfolio with a bearer token. The JSON is returned as-is.
    pub async fn portfolio(&self, token: &str) -> Result<serde_json::Value, ClientError> {
        let resp = self
            .http
            .get(format!("{}/portfolio", self.api_base))
            .bearer_auth(token)
            .send()
            .await?;

        let body = success_body(resp).await?;
        serde_json::from_str(&body).map_err(|_| ClientError::UnexpectedBody(body))
    }
}

/// Stdout text for a finished `login` command, or the stderr line on failure.
pub fn render_login(result: Result<String, ClientError>) -> Result<String, String> {
    result.map_err(|e| failure_message("Login failed", e))
}

/// Indented JSON for a finished `portfolio` command, or the stderr line on
/// failure.
pub fn render_portfolio(result: Result<serde_json::Value, ClientError>) -> Result<String, String> {
    let value = result.map_err(|e| failure_message("Request failed", e))?;
    serde_json::to_string_pretty(&value).map_err(|e| format!("Request failed: {e}"))
}

/// Non-2xx responses carry the status code and the raw body.
fn failure_message(context: &str, err: ClientError) -> String {
    match err {
        ClientError::Status { status, body } => {
            format!("{} ({}): {}", context, status.as_u16(), body)
        }
        other => format!("{}: {}", context, other),
    }
}

/// Response text for a 2xx status, otherwise `ClientError::Status`.
async fn success_body(resp: reqwest::Response) -> Result<String, ClientError> {
    let status = resp.status();
    let body = resp.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(ClientError::Status { status, body })
    }
}
