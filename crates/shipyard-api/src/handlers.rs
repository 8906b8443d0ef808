//! REST API endpoint handlers for the Shipyard API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/health` | Liveness probe |
//! | `GET` | `/api/catalog/wings` | Wing select-list items |
//! | `GET` | `/api/catalog/weapons` | Weapon select-list items |
//! | `POST` | `/api/ships/validate` | Validate an assembled ship |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::{DateTime, Utc};
use shipyard_types::{Licence, Ship};
use shipyard_validation::{ErrorReport, StandardCalculations};
use tracing::{info, info_span};
use uuid::Uuid;

use crate::error::ApiError;
use crate::presentation::{self, SelectListItem};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Body of `POST /api/ships/validate`.
#[derive(Debug, serde::Deserialize)]
pub struct ValidateShipRequest {
    /// The assembled ship.
    pub ship: Ship,
    /// The pilot's licence tier.
    pub licence: Licence,
}

/// Result of one validation pass.
#[derive(Debug, serde::Serialize)]
pub struct ValidateShipResponse {
    /// Identifier of this pass, also recorded on its log span.
    pub validation_id: Uuid,
    /// When the pass ran.
    pub validated_at: DateTime<Utc>,
    /// Whether the ship broke no rule.
    pub valid: bool,
    /// Messages keyed by rule, in rule order.
    pub errors: ErrorReport,
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// GET /api/catalog/*
// ---------------------------------------------------------------------------

/// Select-list items for every wing in the catalog.
pub async fn list_wings(State(state): State<Arc<AppState>>) -> Json<Vec<SelectListItem>> {
    Json(presentation::wing_items(&state.wings))
}

/// Select-list items for every weapon in the catalog.
pub async fn list_weapons(State(state): State<Arc<AppState>>) -> Json<Vec<SelectListItem>> {
    Json(presentation::weapon_items(&state.weapons))
}

// ---------------------------------------------------------------------------
// POST /api/ships/validate
// ---------------------------------------------------------------------------

/// Run every ship rule against the submitted ship.
///
/// Rule failures are reported in the body with status `200`; only an
/// unreadable body is answered with an error status.
pub async fn validate_ship(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ValidateShipRequest>, JsonRejection>,
) -> Result<Json<ValidateShipResponse>, ApiError> {
    let Json(request) = payload?;

    let validation_id = Uuid::now_v7();
    let span = info_span!("validate_ship", %validation_id, ship = %request.ship.id);

    let errors = span.in_scope(|| {
        let errors = shipyard_validation::validate(
            &request.ship,
            &StandardCalculations,
            state.max_takeoff_mass,
            request.licence,
        );
        info!(valid = errors.is_valid(), licence = ?request.licence, "Validation request served");
        errors
    });
    let valid = errors.is_valid();

    Ok(Json(ValidateShipResponse {
        validation_id,
        validated_at: Utc::now(),
        valid,
        errors,
    }))
}
