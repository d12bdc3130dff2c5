//! Web router using Axum

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{health_handler, insights_handler};
use crate::state::AppState;

/// Create the web router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/insights", post(insights_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}
