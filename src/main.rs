//! Server entrypoint. Binds to loopback only.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use ibkr_proxy::config::Config;
use ibkr_proxy::{AppState, create_app};

#[tokio::main]
async fn main() {
    // Load .env for local dev
    let _ = dotenvy::dotenv();

    let config = Config::from_env().expect("Failed to load configuration");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        origins = ?config.frontend_origins,
        "Using in-memory session store with placeholder credential check"
    );

    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, config.port));
    let app = create_app(Arc::new(AppState::with_stubs(config)));

    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
