//! Core entity structs for the Shipyard configurator.
//!
//! These are plain records assembled upstream (form submission, JSON
//! deserialization). They carry no behavior; rule checks live in
//! `shipyard-validation`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::DamageType;
use crate::ids::{EngineId, ShipId, WeaponId, WingId};

// ---------------------------------------------------------------------------
// Weapon
// ---------------------------------------------------------------------------

/// A weapon that can be mounted on a wing hardpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Weapon {
    /// Catalog id.
    pub id: WeaponId,
    /// Display name.
    pub name: String,
    /// Kind of damage dealt.
    pub damage_type: DamageType,
    /// Energy drawn from the ship while mounted.
    pub energy_drain: u32,
    /// Weight added to the ship while mounted.
    pub weight: u32,
}

// ---------------------------------------------------------------------------
// Wing
// ---------------------------------------------------------------------------

/// A wing mounted on a ship, carrying weapons on its hardpoints.
///
/// `hardpoint` may hold more weapons than `number_of_hardpoints` allows. The
/// model deliberately permits it so validation can flag the overload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Wing {
    /// Catalog id.
    pub id: WingId,
    /// Display name, used in validation messages.
    pub name: String,
    /// Agility rating.
    pub agility: u32,
    /// Speed rating.
    pub speed: u32,
    /// Energy drawn by the wing itself.
    pub energy: u32,
    /// Weight of the bare wing.
    pub weight: u32,
    /// Weapons currently mounted, in slot order.
    #[serde(default)]
    pub hardpoint: Vec<Weapon>,
    /// Number of weapon slots the wing offers.
    pub number_of_hardpoints: u32,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The engine driving a ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Engine {
    /// Catalog id. Some engine models are incompatible with specific weapons.
    pub id: EngineId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Energy output rating.
    #[serde(default)]
    pub energy: u32,
    /// Weight of the engine.
    #[serde(default)]
    pub weight: u32,
}

// ---------------------------------------------------------------------------
// Ship
// ---------------------------------------------------------------------------

/// A user-assembled ship: one engine plus an ordered list of wings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Ship {
    /// Ship id.
    pub id: ShipId,
    /// Name given by the owner.
    #[serde(default)]
    pub name: String,
    /// Wings in mounting order.
    #[serde(default)]
    pub wings: Vec<Wing>,
    /// The ship's engine.
    pub engine: Engine,
    /// Aggregate energy capacity available to wings and weapons.
    pub energy: u32,
}
