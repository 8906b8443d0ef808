//! Select-list items for the configurator's wing and weapon pickers.

use serde::{Deserialize, Serialize};
use shipyard_types::{Weapon, Wing};

/// One option of a select list: the submitted value and the label shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectListItem {
    /// Value submitted with the form (the catalog id).
    pub value: String,
    /// Label shown to the user.
    pub text: String,
}

/// Label a wing with its stats: name, agility, speed, energy, weight, hardpoints.
pub fn wing_item(wing: &Wing) -> SelectListItem {
    SelectListItem {
        value: wing.id.to_string(),
        text: format!(
            "{} -  {},  {},  {},  {},  {}",
            wing.name, wing.agility, wing.speed, wing.energy, wing.weight, wing.number_of_hardpoints
        ),
    }
}

/// Label a weapon with its stats: name, damage type, energy drain, weight.
pub fn weapon_item(weapon: &Weapon) -> SelectListItem {
    SelectListItem {
        value: weapon.id.to_string(),
        text: format!(
            "{} - {},  {},  {}",
            weapon.name, weapon.damage_type, weapon.energy_drain, weapon.weight
        ),
    }
}

/// Select-list items for the given wings, in catalog order.
pub fn wing_items(wings: &[Wing]) -> Vec<SelectListItem> {
    wings.iter().map(wing_item).collect()
}

/// Select-list items for the given weapons, in catalog order.
pub fn weapon_items(weapons: &[Weapon]) -> Vec<SelectListItem> {
    weapons.iter().map(weapon_item).collect()
}
