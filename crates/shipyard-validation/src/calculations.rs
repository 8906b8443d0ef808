//! Aggregate ship figures consumed by the validation rules.
//!
//! The rules only need a ship's total weight and energy consumption. Both are
//! behind the [`Calculations`] trait so the formulas can change without
//! touching the rules.

use shipyard_types::Ship;

/// Computes aggregate figures for a ship.
///
/// Implementations must be pure functions of the ship's composition: no side
/// effects, same answer for the same ship.
pub trait Calculations {
    /// Total weight of the ship.
    fn ship_weight(&self, ship: &Ship) -> u32;

    /// Total energy the ship's wings and weapons draw.
    fn energy_consumption(&self, ship: &Ship) -> u32;
}

/// The configurator's standard formulas.
///
/// - weight = engine + every wing + every mounted weapon
/// - energy consumption = every wing + every mounted weapon's drain
///
/// Sums saturate at `u32::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardCalculations;

impl Calculations for StandardCalculations {
    fn ship_weight(&self, ship: &Ship) -> u32 {
        ship.wings.iter().fold(ship.engine.weight, |total, wing| {
            let weapons = wing
                .hardpoint
                .iter()
                .fold(0_u32, |acc, weapon| acc.saturating_add(weapon.weight));
            total.saturating_add(wing.weight).saturating_add(weapons)
        })
    }

    fn energy_consumption(&self, ship: &Ship) -> u32 {
        ship.wings.iter().fold(0_u32, |total, wing| {
            let weapons = wing
                .hardpoint
                .iter()
                .fold(0_u32, |acc, weapon| acc.saturating_add(weapon.energy_drain));
            total.saturating_add(wing.energy).saturating_add(weapons)
        })
    }
}

#[cfg(test)]
mod tests {
    use shipyard_types::{DamageType, Engine, EngineId, ShipId, Weapon, WeaponId, Wing, WingId};

    use super::*;

    fn weapon(weight: u32, energy_drain: u32) -> Weapon {
        Weapon {
            id: WeaponId::new(1),
            name: String::from("Railgun"),
            damage_type: DamageType::Kinetic,
            energy_drain,
            weight,
        }
    }

    fn wing(weight: u32, energy: u32, hardpoint: Vec<Weapon>) -> Wing {
        Wing {
            id: WingId::new(1),
            name: String::from("Fin"),
            agility: 1,
            speed: 1,
            energy,
            weight,
            hardpoint,
            number_of_hardpoints: 4,
        }
    }

    fn ship(engine_weight: u32, wings: Vec<Wing>) -> Ship {
        Ship {
            id: ShipId::new(1),
            name: String::from("Test"),
            wings,
            engine: Engine {
                id: EngineId::new(1),
                name: String::from("Ion"),
                energy: 0,
                weight: engine_weight,
            },
            energy: 100,
        }
    }

    #[test]
    fn weight_sums_engine_wings_and_weapons() {
        let ship = ship(
            50,
            vec![
                wing(20, 0, vec![weapon(5, 0), weapon(7, 0)]),
                wing(20, 0, vec![weapon(3, 0)]),
            ],
        );
        assert_eq!(StandardCalculations.ship_weight(&ship), 105);
    }

    #[test]
    fn bare_ship_weighs_its_engine() {
        let ship = ship(80, Vec::new());
        assert_eq!(StandardCalculations.ship_weight(&ship), 80);
        assert_eq!(StandardCalculations.energy_consumption(&ship), 0);
    }

    #[test]
    fn energy_sums_wings_and_weapon_drain() {
        let ship = ship(
            0,
            vec![
                wing(0, 4, vec![weapon(0, 10)]),
                wing(0, 6, vec![weapon(0, 15), weapon(0, 5)]),
            ],
        );
        assert_eq!(StandardCalculations.energy_consumption(&ship), 40);
    }

    #[test]
    fn sums_saturate_instead_of_overflowing() {
        let ship = ship(u32::MAX, vec![wing(10, u32::MAX, vec![weapon(1, 1)])]);
        assert_eq!(StandardCalculations.ship_weight(&ship), u32::MAX);
        assert_eq!(StandardCalculations.energy_consumption(&ship), u32::MAX);
    }
}
