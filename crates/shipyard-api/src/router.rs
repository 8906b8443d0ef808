//! Axum router construction for the Shipyard API.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /health` -- liveness probe
/// - `GET /api/catalog/wings` -- wing select list
/// - `GET /api/catalog/weapons` -- weapon select list
/// - `POST /api/ships/validate` -- ship validation
///
/// CORS allows any origin so the configurator front-end can be served
/// separately.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/catalog/wings", get(handlers::list_wings))
        .route("/api/catalog/weapons", get(handlers::list_weapons))
        .route("/api/ships/validate", post(handlers::validate_ship))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
