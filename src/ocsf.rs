//! OCSF (Open Cybersecurity Schema Framework) structured event logging.
//!
//! Login outcomes and rejected session tokens are emitted via
//! `tracing::info!` under the `ocsf` target as one JSON object per line.
//! Never panics; serialization errors drop the event.

use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};

// OCSF event class UIDs
pub const CLASS_AUTHENTICATION: u32 = 3001;

// Activity IDs
pub const ACTIVITY_LOGON: u32 = 1;
pub const ACTIVITY_OTHER: u32 = 99; // Session token checks

// Status IDs
pub const STATUS_SUCCESS: u32 = 1;
pub const STATUS_FAILURE: u32 = 2;

// Severity IDs
pub const SEVERITY_INFORMATIONAL: u32 = 1;
pub const SEVERITY_LOW: u32 = 2;
pub const SEVERITY_MEDIUM: u32 = 3;

// Auth protocol IDs
pub const AUTH_PROTOCOL_PASSWORD: u32 = 2;

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

fn severity_name(id: u32) -> &'static str {
    match id {
        SEVERITY_INFORMATIONAL => "Informational",
        SEVERITY_LOW => "Low",
        SEVERITY_MEDIUM => "Medium",
        _ => "Unknown",
    }
}

fn status_name(id: u32) -> &'static str {
    match id {
        STATUS_SUCCESS => "Success",
        _ => "Failure",
    }
}

fn emit(event: &serde_json::Value) {
    if let Ok(json) = serde_json::to_string(event) {
        tracing::info!(target: "ocsf", "{}", json);
    }
}

/// Build an OCSF Authentication (3001) event.
fn authentication_event(
    activity_id: u32,
    activity_name: &str,
    status_id: u32,
    severity_id: u32,
    user_name: Option<&str>,
    message: &str,
) -> serde_json::Value {
    let mut event = json!({
        "class_uid": CLASS_AUTHENTICATION,
        "class_name": "Authentication",
        "activity_id": activity_id,
        "activity_name": activity_name,
        "severity_id": severity_id,
        "severity": severity_name(severity_id),
        "status_id": status_id,
        "status": status_name(status_id),
        "time": now_millis(),
        "metadata": {
            "product": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            }
        },
        "auth_protocol_id": AUTH_PROTOCOL_PASSWORD,
        "auth_protocol": "Password",
        "message": message,
    });

    if let Some(name) = user_name.filter(|n| !n.is_empty()) {
        event["actor"] = json!({
            "user": {
                "name": name,
                "type_id": 1,
                "type": "User"
            }
        });
    }

    event
}

/// Login accepted or rejected.
pub fn logon_event(success: bool, user_name: &str) {
    let event = if success {
        authentication_event(
            ACTIVITY_LOGON,
            "Logon",
            STATUS_SUCCESS,
            SEVERITY_INFORMATIONAL,
            Some(user_name),
            "Session issued",
        )
    } else {
        authentication_event(
            ACTIVITY_LOGON,
            "Logon",
            STATUS_FAILURE,
            SEVERITY_MEDIUM,
            Some(user_name),
            "Invalid credentials",
        )
    };
    emit(&event);
}

/// A request presented no token, or one the store does not know.
pub fn token_rejected_event(token_present: bool) {
    let message = if token_present {
        "Unrecognized session token"
    } else {
        "No session token presented"
    };
    emit(&authentication_event(
        ACTIVITY_OTHER,
        "Other",
        STATUS_FAILURE,
        SEVERITY_LOW,
        None,
        message,
    ));
}
