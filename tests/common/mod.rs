//! Test utilities: app builder, request helpers, loopback server.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use ibkr_proxy::config::Config;
use ibkr_proxy::{AppState, create_app};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceExt;

/// Build a test app with the in-memory store and placeholder stubs.
pub fn build_test_app() -> (axum::Router, Arc<AppState>) {
    build_test_app_with_config(Config::test_default())
}

/// Build a test app with a custom Config.
pub fn build_test_app_with_config(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::with_stubs(config));
    let app = create_app(state.clone());
    (app, state)
}

/// Read response body as JSON.
pub async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub fn login_request(username: &str, password: &str) -> Request<Body> {
    let body = json!({"username": username, "password": password});
    Request::builder()
        .method("POST")
        .uri("/api/login")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Log in through the router and return the issued token.
pub async fn login_token(app: &axum::Router, username: &str, password: &str) -> String {
    let resp = app
        .clone()
        .oneshot(login_request(username, password))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}

pub fn is_hex32(s: &str) -> bool {
    s.len() == 32 && s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// Serve the app on an ephemeral loopback port. Returns the `/api` base URL.
pub async fn spawn_server() -> (String, Arc<AppState>) {
    let (app, state) = build_test_app();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/api"), state)
}
