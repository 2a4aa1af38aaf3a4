//! Application configuration via environment variables.

use std::env;

const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:8000", "http://127.0.0.1:8000"];
const DEFAULT_PORT: u16 = 5000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// CORS allow-list for `/api/*`.
    pub frontend_origins: Vec<String>,
    pub port: u16,
    pub session_https_only: bool,
    pub log_json: bool,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Nothing is required; `PORT` must be numeric when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let frontend_origins = parse_origins(lookup("FRONTEND_ORIGINS").as_deref());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT".into(),
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            frontend_origins,
            port,
            session_https_only: lookup("SESSION_HTTPS_ONLY")
                .map(|v| v == "true" || v == "1" || v == "True")
                .unwrap_or(false),
            log_json: lookup("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }
}

/// Fixed configuration for tests.
impl Config {
    pub fn test_default() -> Self {
        Self {
            frontend_origins: DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
            port: DEFAULT_PORT,
            session_https_only: false,
            log_json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },
}

/// Split a comma-separated origin list, dropping blanks. Falls back to the
/// localhost defaults when nothing usable remains.
fn parse_origins(raw: Option<&str>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();

    if origins.is_empty() {
        DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect()
    } else {
        origins
    }
}
