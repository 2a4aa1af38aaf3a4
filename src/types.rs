//! Shared request/response DTOs.

use serde::{Deserialize, Serialize};

/// POST /api/login request body. Absent fields read as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/login response.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub token: String,
}

/// A monetary figure as the gateway reports it. Whole amounts stay integers
/// on the wire (`18250`, not `18250.0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Int(i64),
    Float(f64),
}

impl From<i64> for Amount {
    fn from(v: i64) -> Self {
        Amount::Int(v)
    }
}

impl From<f64> for Amount {
    fn from(v: f64) -> Self {
        Amount::Float(v)
    }
}

/// One holding in a portfolio snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub quantity: i64,
    pub price: Amount,
    pub pnl: Amount,
}

/// GET /api/portfolio response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub positions: Vec<Position>,
    pub cash: Amount,
}

/// GET /health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_keeps_integers_integral() {
        assert_eq!(serde_json::to_value(Amount::Int(18250)).unwrap(), json!(18250));
        assert_eq!(serde_json::to_string(&Amount::Int(1000)).unwrap(), "1000");
        assert_eq!(serde_json::to_string(&Amount::Float(1000.0)).unwrap(), "1000.0");
    }

    #[test]
    fn test_amount_parse_picks_variant() {
        assert_eq!(serde_json::from_str::<Amount>("18250").unwrap(), Amount::Int(18250));
        assert_eq!(serde_json::from_str::<Amount>("-51.2").unwrap(), Amount::Float(-51.2));
    }
}
