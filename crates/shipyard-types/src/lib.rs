//! Shared type definitions for the Shipyard configurator.
//!
//! This crate is the single source of truth for the domain model used across
//! the workspace. Types flow downstream to `TypeScript` via `ts-rs` for the
//! configurator front-end.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe catalog identifiers
//! - [`enums`] -- Damage types and licence tiers
//! - [`structs`] -- Wings, weapons, engines, and ships

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{DamageType, Licence, UNLIMITED_LICENCE_VALUE};
pub use ids::{EngineId, ShipId, WeaponId, WingId};
pub use structs::{Engine, Ship, Weapon, Wing};
