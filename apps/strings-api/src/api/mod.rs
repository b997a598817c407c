//! API routes module
//!
//! Item routes are served at the root (`/items`, `/head`, `/tail`), next to
//! `/health`.

pub mod items;

use axum::Router;
use axum_helpers::health_router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(items::router(state))
        .merge(health_router(state.config.app))
}
