//! Ship validation rules.
//!
//! [`validate_ship`] runs every rule in a fixed order:
//! 1. Wing count -- wings come in pairs.
//! 2. Hardpoints -- no wing carries more weapons than it has slots.
//! 3. Hull weight -- the ship is light enough to take off.
//! 4. Energy -- consumption stays within the ship's capacity.
//! 5. Imploder -- never on an Intrepid Class engine.
//! 6. Combinations -- no heat with cold, no statis with gravity.
//! 7. Nullifier -- never alone on a wing.
//! 8. Kinetic balance -- kinetic drain is even across wings.
//! 9. Licence -- the pilot may fly a ship this heavy.
//! 10. Armament -- every wing carries a weapon.
//!
//! Rules are independent. Each one runs regardless of earlier failures and
//! appends to the [`ErrorReport`]; none of them fails the call. The order
//! only decides which errors are listed first.

use shipyard_types::{DamageType, Licence, Ship, UNLIMITED_LICENCE_VALUE, Weapon, Wing};
use tracing::{debug, info};

use crate::calculations::Calculations;
use crate::catalog;
use crate::report::{ErrorKey, ErrorReport};

/// Everything one validation pass reads, borrowed for the duration of the call.
///
/// Built fresh by [`validate_ship`] so concurrent passes never share state.
struct Inspection<'a, C: Calculations + ?Sized> {
    ship: &'a Ship,
    calculations: &'a C,
    /// Every mounted weapon across all wings.
    weapons: Vec<&'a Weapon>,
}

impl<'a, C: Calculations + ?Sized> Inspection<'a, C> {
    fn new(ship: &'a Ship, calculations: &'a C) -> Self {
        let weapons = ship
            .wings
            .iter()
            .flat_map(|wing| wing.hardpoint.iter())
            .collect();
        Self {
            ship,
            calculations,
            weapons,
        }
    }

    fn any_weapon_of(&self, damage_type: DamageType) -> bool {
        self.weapons.iter().any(|w| w.damage_type == damage_type)
    }
}

/// Validate a ship against every rule, appending failures to `report`.
///
/// `max_takeoff_mass` is the absolute weight ceiling; `licence` caps the
/// weight further unless it is unlimited. The ship is only read.
pub fn validate_ship<C: Calculations + ?Sized>(
    report: &mut ErrorReport,
    ship: &Ship,
    calculations: &C,
    max_takeoff_mass: u32,
    licence: Licence,
) {
    let inspection = Inspection::new(ship, calculations);
    let before = report.error_count();

    validate_number_of_wings(&inspection, report);
    validate_number_of_weapons(&inspection, report);
    validate_hull_weight(&inspection, max_takeoff_mass, report);
    validate_energy_consumption(&inspection, report);
    validate_imploder_weapons(&inspection, report);
    validate_combination_weapons(&inspection, report);
    validate_nullifier_weapon(&inspection, report);
    validate_kinetic_weapons(&inspection, report);
    validate_max_licence_weight(&inspection, licence, report);
    validate_at_least_one_weapon_per_wing(&inspection, report);

    info!(
        ship = %ship.id,
        wings = ship.wings.len(),
        weapons = inspection.weapons.len(),
        error_count = report.error_count().saturating_sub(before),
        "Ship validated"
    );
}

/// Validate a ship into a fresh report.
pub fn validate<C: Calculations + ?Sized>(
    ship: &Ship,
    calculations: &C,
    max_takeoff_mass: u32,
    licence: Licence,
) -> ErrorReport {
    let mut report = ErrorReport::new();
    validate_ship(&mut report, ship, calculations, max_takeoff_mass, licence);
    report
}

fn reject(report: &mut ErrorReport, key: ErrorKey, message: String) {
    debug!(key = %key, message = %message, "Ship rule failed");
    report.add(key, message);
}

/// Rule 1: wings come in pairs.
fn validate_number_of_wings<C: Calculations + ?Sized>(
    inspection: &Inspection<'_, C>,
    report: &mut ErrorReport,
) {
    if inspection.ship.wings.len() % 2 != 0 {
        reject(
            report,
            ErrorKey::OddWings,
            String::from("The amount of wings on a ship must be even"),
        );
    }
}

fn is_overloaded(wing: &Wing) -> bool {
    usize::try_from(wing.number_of_hardpoints).is_ok_and(|slots| wing.hardpoint.len() > slots)
}

/// Rule 2: one error per wing with more weapons than hardpoints.
fn validate_number_of_weapons<C: Calculations + ?Sized>(
    inspection: &Inspection<'_, C>,
    report: &mut ErrorReport,
) {
    for wing in inspection.ship.wings.iter().filter(|wing| is_overloaded(wing)) {
        reject(
            report,
            ErrorKey::WeaponOverload,
            format!("There are too many weapons on {}", wing.name),
        );
    }
}

/// Rule 3: takeoff mass. A ship exactly at the limit may take off.
fn validate_hull_weight<C: Calculations + ?Sized>(
    inspection: &Inspection<'_, C>,
    max_takeoff_mass: u32,
    report: &mut ErrorReport,
) {
    if inspection.calculations.ship_weight(inspection.ship) > max_takeoff_mass {
        reject(
            report,
            ErrorKey::CapacityOverload,
            String::from("The ship is too heavy to take off"),
        );
    }
}

/// Rule 4: energy budget.
fn validate_energy_consumption<C: Calculations + ?Sized>(
    inspection: &Inspection<'_, C>,
    report: &mut ErrorReport,
) {
    if inspection.calculations.energy_consumption(inspection.ship) > inspection.ship.energy {
        reject(
            report,
            ErrorKey::EnergyConsumptionOverdraft,
            String::from("The energy consumption of the ship is too high"),
        );
    }
}

/// Rule 5: Imploder on an Intrepid Class engine.
fn validate_imploder_weapons<C: Calculations + ?Sized>(
    inspection: &Inspection<'_, C>,
    report: &mut ErrorReport,
) {
    if inspection.ship.engine.id == catalog::INTREPID_CLASS_ENGINE
        && inspection.weapons.iter().any(|w| w.id == catalog::IMPLODER)
    {
        reject(
            report,
            ErrorKey::ImplosionDanger,
            String::from(
                "The combination of Imploder weapon and Intrepid Class engine is not allowed",
            ),
        );
    }
}

/// Rule 6: banned damage-type pairs, anywhere on the ship.
fn validate_combination_weapons<C: Calculations + ?Sized>(
    inspection: &Inspection<'_, C>,
    report: &mut ErrorReport,
) {
    if inspection.any_weapon_of(DamageType::Heat) && inspection.any_weapon_of(DamageType::Cold) {
        reject(
            report,
            ErrorKey::HeatStress,
            String::from("The combination of heat and cold weapons is not allowed"),
        );
    }
    if inspection.any_weapon_of(DamageType::Statis) && inspection.any_weapon_of(DamageType::Gravity)
    {
        reject(
            report,
            ErrorKey::ForceStress,
            String::from("The combination of statis and gravity weapons is not allowed"),
        );
    }
}

/// Rule 7: one error per wing where a Nullifier lacks company.
fn validate_nullifier_weapon<C: Calculations + ?Sized>(
    inspection: &Inspection<'_, C>,
    report: &mut ErrorReport,
) {
    let lone = inspection.ship.wings.iter().filter(|wing| {
        wing.hardpoint.iter().any(|w| w.id == catalog::NULLIFIER)
            && wing.hardpoint.len() < catalog::NULLIFIER_MIN_WING_WEAPONS
    });
    for wing in lone {
        reject(
            report,
            ErrorKey::LoneNullifier,
            format!("The Nullifier can't be the only weapon on {}", wing.name),
        );
    }
}

/// Kinetic energy drain summed per wing, for wings carrying kinetic weapons.
fn kinetic_drain_per_wing(ship: &Ship) -> Vec<u32> {
    ship.wings
        .iter()
        .filter(|wing| {
            wing.hardpoint
                .iter()
                .any(|w| w.damage_type == DamageType::Kinetic)
        })
        .map(|wing| {
            wing.hardpoint
                .iter()
                .filter(|w| w.damage_type == DamageType::Kinetic)
                .fold(0_u32, |acc, w| acc.saturating_add(w.energy_drain))
        })
        .collect()
}

/// Whether the per-wing kinetic drains are out of balance.
///
/// A single kinetic wing is judged on its own total. With several wings the
/// spread between the highest and lowest total is what counts.
fn kinetic_unbalanced(drains: &[u32]) -> bool {
    let (Some(&max), Some(&min)) = (drains.iter().max(), drains.iter().min()) else {
        return false;
    };
    let spread = max.saturating_sub(min);
    spread >= catalog::KINETIC_DRAIN_LIMIT
        || (drains.len() == 1 && max >= catalog::KINETIC_DRAIN_LIMIT)
}

/// Rule 8: kinetic balance across wings.
fn validate_kinetic_weapons<C: Calculations + ?Sized>(
    inspection: &Inspection<'_, C>,
    report: &mut ErrorReport,
) {
    if kinetic_unbalanced(&kinetic_drain_per_wing(inspection.ship)) {
        reject(
            report,
            ErrorKey::KineticDifference,
            String::from(
                "The energy drain of kinetic weapons on different wings cannot be more than 35",
            ),
        );
    }
}

/// Rule 9: licence weight cap, skipped for unlimited licences.
fn validate_max_licence_weight<C: Calculations + ?Sized>(
    inspection: &Inspection<'_, C>,
    licence: Licence,
    report: &mut ErrorReport,
) {
    let max_weight = licence.value();
    if max_weight == UNLIMITED_LICENCE_VALUE {
        return;
    }
    let weight = inspection.calculations.ship_weight(inspection.ship);
    if i64::from(weight) > i64::from(max_weight) {
        reject(
            report,
            ErrorKey::ToHeavyForLicense,
            String::from("The ship is too heavy for your license"),
        );
    }
}

/// Rule 10: a single error if any wing is unarmed.
fn validate_at_least_one_weapon_per_wing<C: Calculations + ?Sized>(
    inspection: &Inspection<'_, C>,
    report: &mut ErrorReport,
) {
    if inspection.ship.wings.iter().any(|wing| wing.hardpoint.is_empty()) {
        reject(
            report,
            ErrorKey::AtLeastOneWeaponPerWing,
            String::from("Please select at least one weapon per wing."),
        );
    }
}
