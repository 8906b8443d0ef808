//! Integration tests for the Shipyard API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use shipyard_api::router::build_router;
use shipyard_api::state::AppState;
use shipyard_types::{DamageType, Weapon, WeaponId, Wing, WingId};
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    let wings = vec![Wing {
        id: WingId::new(1),
        name: String::from("Delta Fin"),
        agility: 7,
        speed: 9,
        energy: 12,
        weight: 40,
        hardpoint: Vec::new(),
        number_of_hardpoints: 3,
    }];
    let weapons = vec![
        Weapon {
            id: WeaponId::new(9),
            name: String::from("Imploder"),
            damage_type: DamageType::Gravity,
            energy_drain: 25,
            weight: 14,
        },
        Weapon {
            id: WeaponId::new(14),
            name: String::from("Nullifier"),
            damage_type: DamageType::Energy,
            energy_drain: 20,
            weight: 8,
        },
    ];
    Arc::new(AppState::new(1000).with_catalog(wings, weapons))
}

fn weapon_json(id: u32, damage_type: &str, energy_drain: u32) -> Value {
    json!({
        "id": id,
        "name": format!("Weapon {id}"),
        "damage_type": damage_type,
        "energy_drain": energy_drain,
        "weight": 5,
    })
}

fn wing_json(name: &str, number_of_hardpoints: u32, hardpoint: Vec<Value>) -> Value {
    json!({
        "id": 1,
        "name": name,
        "agility": 3,
        "speed": 3,
        "energy": 5,
        "weight": 20,
        "number_of_hardpoints": number_of_hardpoints,
        "hardpoint": hardpoint,
    })
}

fn ship_json(engine_id: u32, wings: Vec<Value>) -> Value {
    json!({
        "id": 42,
        "name": "Kestrel",
        "engine": { "id": engine_id, "name": "Engine", "energy": 50, "weight": 30 },
        "energy": 100,
        "wings": wings,
    })
}

fn validate_request(body: &Value) -> Request<Body> {
    Request::post("/api/ships/validate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_health() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_list_wings() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/api/catalog/wings").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json[0]["value"], "1");
    assert_eq!(json[0]["text"], "Delta Fin -  7,  9,  12,  40,  3");
}

#[tokio::test]
async fn test_list_weapons() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/api/catalog/weapons").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().map(Vec::len), Some(2));
    assert_eq!(json[1]["value"], "14");
    assert_eq!(json[1]["text"], "Nullifier - Energy,  20,  8");
}

#[tokio::test]
async fn test_validate_valid_ship() {
    let router = build_router(make_test_state());
    let ship = ship_json(
        1,
        vec![
            wing_json("Left", 2, vec![weapon_json(1, "Energy", 5)]),
            wing_json("Right", 2, vec![weapon_json(1, "Energy", 5)]),
        ],
    );

    let response = router
        .oneshot(validate_request(&json!({ "ship": ship, "licence": "Trainee" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["valid"], true);
    assert_eq!(json["errors"], json!({}));
    assert!(json["validation_id"].is_string());
    assert!(json["validated_at"].is_string());
}

#[tokio::test]
async fn test_validate_reports_rule_failures() {
    let router = build_router(make_test_state());
    let ship = ship_json(
        2,
        vec![
            wing_json("Left", 1, vec![weapon_json(9, "Heat", 5), weapon_json(2, "Cold", 5)]),
            wing_json("Right", 1, vec![weapon_json(14, "Energy", 5)]),
            wing_json("Dorsal", 1, Vec::new()),
        ],
    );

    let response = router
        .oneshot(validate_request(&json!({ "ship": ship, "licence": "Admiral" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["valid"], false);
    assert_eq!(
        json["errors"],
        json!({
            "OddWings": ["The amount of wings on a ship must be even"],
            "WeaponOverload": ["There are too many weapons on Left"],
            "ImplosionDanger": [
                "The combination of Imploder weapon and Intrepid Class engine is not allowed"
            ],
            "HeatStress": ["The combination of heat and cold weapons is not allowed"],
            "LoneNullifier": ["The Nullifier can't be the only weapon on Right"],
            "AtLeastOneWeaponPerWing": ["Please select at least one weapon per wing."],
        })
    );
}

#[tokio::test]
async fn test_validate_uses_configured_takeoff_mass() {
    let router = build_router(make_test_state());
    // engine 30 + wings 2 x 20 + weapons 2 x 5 = 80
    let ship = ship_json(
        1,
        vec![
            wing_json("Left", 2, vec![weapon_json(1, "Energy", 5)]),
            wing_json("Right", 2, vec![weapon_json(1, "Energy", 5)]),
        ],
    );

    let within = router
        .clone()
        .oneshot(validate_request(&json!({ "ship": ship.clone(), "licence": "Trainee" })))
        .await
        .unwrap();
    let json = body_to_json(within.into_body()).await;
    assert_eq!(json["valid"], true);

    let tight = build_router(Arc::new(AppState::new(79)));
    let response = tight
        .oneshot(validate_request(&json!({ "ship": ship, "licence": "Trainee" })))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        json["errors"]["CapacityOverload"],
        json!(["The ship is too heavy to take off"])
    );
    assert!(json["errors"].get("ToHeavyForLicense").is_none());
}

#[tokio::test]
async fn test_validate_rejects_malformed_body() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(validate_request(&json!({ "ship": { "id": "not a number" } })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 400);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_validate_rejects_unknown_licence() {
    let router = build_router(make_test_state());
    let ship = ship_json(1, Vec::new());

    let response = router
        .oneshot(validate_request(&json!({ "ship": ship, "licence": "Cadet" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/api/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
