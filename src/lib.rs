//! ibkr-proxy: placeholder backend for a brokerage gateway.
//!
//! Issues opaque session tokens on login and serves a portfolio snapshot to
//! holders of a valid token. Credential checks and portfolio data sit behind
//! capability traits so the gateway integration can replace the stubs.

pub mod authority;
pub mod client;
pub mod config;
pub mod error;
pub mod ocsf;
pub mod portfolio;
pub mod routes;
pub mod session;
pub mod types;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::authority::{PlaceholderVerifier, SessionAuthority};
use crate::config::Config;
use crate::portfolio::{PortfolioSource, StaticPortfolio};
use crate::session::memory::InMemoryStore;

/// Shared application state available to all route handlers.
pub struct AppState {
    pub config: Config,
    pub authority: SessionAuthority,
    pub portfolio: Arc<dyn PortfolioSource>,
}

impl AppState {
    /// State wired with the in-memory store and the placeholder stubs.
    pub fn with_stubs(config: Config) -> Self {
        Self {
            config,
            authority: SessionAuthority::new(
                Arc::new(PlaceholderVerifier),
                Arc::new(InMemoryStore::new()),
            ),
            portfolio: Arc::new(StaticPortfolio),
        }
    }
}

/// Build the Axum router with all middleware and routes.
pub fn create_app(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/login", axum::routing::post(routes::login::login))
        .route(
            "/portfolio",
            axum::routing::get(routes::portfolio::portfolio),
        )
        .layer(cors_layer(&state.config.frontend_origins));

    Router::new()
        .route("/health", axum::routing::get(routes::health::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for `/api/*`: listed origins only, with credentials.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring unparseable CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
