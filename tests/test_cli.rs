//! The `ibkr-cli` binary against a live server: stdout, stderr and exit codes.

mod common;

use common::{is_hex32, spawn_server};
use std::process::{Command, Output, Stdio};

/// Run the CLI off the async runtime so the server task keeps serving.
async fn run_cli(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_ibkr-cli"))
            .args(&args)
            .env_remove("IBKR_API_BASE")
            .stdin(Stdio::null())
            .output()
            .expect("failed to run ibkr-cli")
    })
    .await
    .unwrap()
}

fn args(base: &str, rest: &[&str]) -> Vec<String> {
    let mut v = vec!["--api-base".to_string(), base.to_string()];
    v.extend(rest.iter().map(|s| s.to_string()));
    v
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_login_prints_token() {
    let (base, state) = spawn_server().await;

    let out = run_cli(args(&base, &["login", "--user", "alice", "--password", "secret"])).await;

    assert!(out.status.success());
    let token = String::from_utf8(out.stdout).unwrap().trim().to_string();
    assert!(is_hex32(&token), "stdout {token:?}");
    assert!(state.authority.validate(Some(token.as_str())).await.is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_login_failure_exits_one() {
    let (base, _state) = spawn_server().await;

    let out = run_cli(args(&base, &["login", "--user", "", "--password", "secret"])).await;

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("Login failed (401): "), "stderr {stderr:?}");
    assert!(stderr.contains("invalid credentials"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_portfolio_pretty_prints() {
    let (base, state) = spawn_server().await;
    let token = state.authority.issue("alice", "secret").await.unwrap();

    let out = run_cli(args(&base, &["portfolio", "--token", &token])).await;

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("{\n  \"cash\": 18250,\n"), "stdout {stdout:?}");
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["positions"].as_array().unwrap().len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_portfolio_bad_token_exits_one() {
    let (base, _state) = spawn_server().await;

    let out = run_cli(args(&base, &["portfolio", "--token", "nope"])).await;

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert_eq!(
        stderr.trim_end(),
        r#"Request failed (401): {"error":"unauthorized"}"#
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_login_prompts_when_user_missing() {
    let (base, _state) = spawn_server().await;

    // Stdin is empty, so the prompted user reads as "" and login is rejected.
    let out = run_cli(args(&base, &["login", "--password", "secret"])).await;

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("User: "), "stderr {stderr:?}");
    assert!(stderr.contains("Login failed (401): "));
}
