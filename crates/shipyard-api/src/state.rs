//! Shared application state for the Shipyard API.
//!
//! [`AppState`] is read-only after startup: the rule parameters and the
//! catalog offered to the configurator. Each validation request builds its
//! own error report, so handlers never write to shared state.

use shipyard_types::{Weapon, Wing};

use crate::config::ShipyardConfig;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Absolute ship weight ceiling applied to every validation.
    pub max_takeoff_mass: u32,
    /// Wing models offered for selection.
    pub wings: Vec<Wing>,
    /// Weapon models offered for selection.
    pub weapons: Vec<Weapon>,
}

impl AppState {
    /// Create state with the given takeoff limit and an empty catalog.
    pub const fn new(max_takeoff_mass: u32) -> Self {
        Self {
            max_takeoff_mass,
            wings: Vec::new(),
            weapons: Vec::new(),
        }
    }

    /// Build state from loaded configuration.
    pub fn from_config(config: &ShipyardConfig) -> Self {
        Self {
            max_takeoff_mass: config.rules.max_takeoff_mass,
            wings: config.catalog.wings.clone(),
            weapons: config.catalog.weapons.clone(),
        }
    }

    /// Replace the catalog offered for selection.
    #[must_use]
    pub fn with_catalog(mut self, wings: Vec<Wing>, weapons: Vec<Weapon>) -> Self {
        self.wings = wings;
        self.weapons = weapons;
        self
    }
}
