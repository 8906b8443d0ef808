//! Enumeration types for the Shipyard configurator.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Damage types
// ---------------------------------------------------------------------------

/// The kind of damage a weapon deals.
///
/// Heat, Cold, Statis, Gravity, and Kinetic take part in combination and
/// balance rules. The remaining types only matter for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum DamageType {
    /// Thermal weapons. Cannot be combined with [`DamageType::Cold`].
    Heat,
    /// Cryogenic weapons. Cannot be combined with [`DamageType::Heat`].
    Cold,
    /// Stasis-field weapons. Cannot be combined with [`DamageType::Gravity`].
    Statis,
    /// Gravitational weapons. Cannot be combined with [`DamageType::Statis`].
    Gravity,
    /// Projectile weapons, subject to the per-wing energy balance rule.
    Kinetic,
    /// Explosive ordnance.
    Explosive,
    /// Directed-energy weapons.
    Energy,
    /// Corrosive payloads.
    Corrosive,
    /// Radiation emitters.
    Radiation,
}

impl core::fmt::Display for DamageType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Heat => "Heat",
            Self::Cold => "Cold",
            Self::Statis => "Statis",
            Self::Gravity => "Gravity",
            Self::Kinetic => "Kinetic",
            Self::Explosive => "Explosive",
            Self::Energy => "Energy",
            Self::Corrosive => "Corrosive",
            Self::Radiation => "Radiation",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Pilot licences
// ---------------------------------------------------------------------------

/// Sentinel licence value meaning "no weight limit".
pub const UNLIMITED_LICENCE_VALUE: i32 = -1;

/// A pilot licence tier.
///
/// The numeric value of each tier is the maximum ship weight the holder is
/// allowed to fly, or [`UNLIMITED_LICENCE_VALUE`] for no limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[repr(i32)]
pub enum Licence {
    /// Entry tier, ships up to 100 weight units.
    Trainee = 100,
    /// Standard tier, ships up to 250 weight units.
    Pilot = 250,
    /// Senior tier, ships up to 500 weight units.
    Captain = 500,
    /// Fleet tier, ships up to 1000 weight units.
    Commander = 1000,
    /// No weight restriction.
    Admiral = UNLIMITED_LICENCE_VALUE,
}

impl Licence {
    /// All licence tiers, lowest first.
    pub const ALL: [Self; 5] = [
        Self::Trainee,
        Self::Pilot,
        Self::Captain,
        Self::Commander,
        Self::Admiral,
    ];

    /// The raw numeric value of the tier.
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// The maximum ship weight permitted by this tier, `None` when unlimited.
    pub const fn max_weight(self) -> Option<u32> {
        let value = self.value();
        if value == UNLIMITED_LICENCE_VALUE {
            None
        } else {
            Some(value.unsigned_abs())
        }
    }
}
