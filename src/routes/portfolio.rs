//! GET /api/portfolio

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::session::extract::AuthenticatedUser;
use crate::types::Portfolio;

/// Portfolio snapshot for the session's user.
pub async fn portfolio(
    State(state): State<Arc<crate::AppState>>,
    AuthenticatedUser(username): AuthenticatedUser,
) -> Json<Portfolio> {
    Json(state.portfolio.fetch(&username).await)
}
