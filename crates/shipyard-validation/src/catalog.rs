//! Catalog entries that specific rules key on.
//!
//! Rules refer to these named ids rather than raw numbers so that a catalog
//! renumbering only has to be applied here.

use shipyard_types::{EngineId, WeaponId};

/// The Intrepid Class engine. Cannot fly with an Imploder mounted.
pub const INTREPID_CLASS_ENGINE: EngineId = EngineId::new(2);

/// The Imploder weapon. Banned in combination with [`INTREPID_CLASS_ENGINE`].
pub const IMPLODER: WeaponId = WeaponId::new(9);

/// The Nullifier weapon. Must share its wing with at least one other weapon.
pub const NULLIFIER: WeaponId = WeaponId::new(14);

/// Minimum number of weapons on a wing that carries a [`NULLIFIER`].
pub const NULLIFIER_MIN_WING_WEAPONS: usize = 2;

/// Kinetic energy-drain spread (or single-wing total) at which the balance rule fails.
pub const KINETIC_DRAIN_LIMIT: u32 = 35;
