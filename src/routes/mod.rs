//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the companion form endpoints and the health check under
//! a single Axum router, with permissive CORS for the browser client and
//! request tracing.

pub mod companion;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/companion/{companion_id}",
            get(companion::get_companion_page).post(companion::submit_companion),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
