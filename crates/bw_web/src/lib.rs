use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the demo API router.
///
/// The permissive CORS layer answers `OPTIONS` preflights and stamps
/// `Access-Control-Allow-Origin: *` on every response.
pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route(
            "/api/entries",
            get(handlers::list_entries).post(handlers::update_entry),
        )
        .route("/api/analytics", get(handlers::analytics))
        .route("/api/health", get(handlers::health))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::{create_app, AppState};
    pub use bw_core::{Error, Result};
}
