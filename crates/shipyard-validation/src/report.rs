//! The error report a validation pass writes into.
//!
//! [`ErrorReport`] maps an error key to one or more human-readable messages.
//! It is append-only: messages are never removed or rewritten, and keys keep
//! the order in which they were first reported so the first failing rule is
//! listed first.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Keys under which the ship rules report their failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    /// The ship has an odd number of wings.
    OddWings,
    /// A wing carries more weapons than it has hardpoints.
    WeaponOverload,
    /// The ship exceeds the maximum takeoff mass.
    CapacityOverload,
    /// Wings and weapons draw more energy than the ship provides.
    EnergyConsumptionOverdraft,
    /// An Imploder is mounted on a ship with an Intrepid Class engine.
    ImplosionDanger,
    /// Heat and cold weapons are mounted together.
    HeatStress,
    /// Statis and gravity weapons are mounted together.
    ForceStress,
    /// A Nullifier is the only weapon on its wing.
    LoneNullifier,
    /// Kinetic energy drain is unbalanced across wings.
    KineticDifference,
    /// The ship is heavier than the pilot's licence allows.
    ToHeavyForLicense,
    /// At least one wing has no weapon.
    AtLeastOneWeaponPerWing,
}

impl ErrorKey {
    /// The string form used as the report key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OddWings => "OddWings",
            Self::WeaponOverload => "WeaponOverload",
            Self::CapacityOverload => "CapacityOverload",
            Self::EnergyConsumptionOverdraft => "EnergyConsumptionOverdraft",
            Self::ImplosionDanger => "ImplosionDanger",
            Self::HeatStress => "HeatStress",
            Self::ForceStress => "ForceStress",
            Self::LoneNullifier => "LoneNullifier",
            Self::KineticDifference => "KineticDifference",
            Self::ToHeavyForLicense => "ToHeavyForLicense",
            Self::AtLeastOneWeaponPerWing => "AtLeastOneWeaponPerWing",
        }
    }
}

impl core::fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error messages collected during one validation pass.
///
/// Serializes as a JSON object of `key -> [message, ...]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    entries: Vec<(String, Vec<String>)>,
}

impl ErrorReport {
    /// Create an empty report.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a message under `key`. Repeated keys accumulate messages.
    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        let key = key.into();
        let message = message.into();
        if let Some((_, messages)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            messages.push(message);
        } else {
            self.entries.push((key, vec![message]));
        }
    }

    /// Append a message under a rule key.
    pub fn add(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.add_error(key.as_str(), message);
    }

    /// Whether no error has been recorded.
    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any message was recorded under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Whether any message was recorded under a rule key.
    pub fn has(&self, key: ErrorKey) -> bool {
        self.contains_key(key.as_str())
    }

    /// Messages recorded under `key`, empty if none.
    pub fn messages(&self, key: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or_default()
    }

    /// Messages recorded under a rule key, empty if none.
    pub fn messages_for(&self, key: ErrorKey) -> &[String] {
        self.messages(key.as_str())
    }

    /// Keys in the order they were first reported.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, messages)` pairs in the order keys were first reported.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, messages)| (k.as_str(), messages.as_slice()))
    }

    /// Total number of messages across all keys.
    pub fn error_count(&self) -> usize {
        self.entries.iter().map(|(_, messages)| messages.len()).sum()
    }
}

impl Serialize for ErrorReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, messages) in &self.entries {
            map.serialize_entry(key, messages)?;
        }
        map.end()
    }
}
