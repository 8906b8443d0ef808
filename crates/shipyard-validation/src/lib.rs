//! Business-rule validation for ships assembled in the Shipyard configurator.
//!
//! This crate checks a user-assembled [`Ship`](shipyard_types::Ship) against
//! the fixed rule set (wing pairing, hardpoint capacity, weight and energy
//! budgets, banned weapon combinations, licence caps) and records
//! human-readable errors. It performs no I/O and holds no global state; every
//! call works on its own [`ErrorReport`].
//!
//! # Modules
//!
//! - [`calculations`] -- The [`Calculations`] capability and [`StandardCalculations`]
//! - [`catalog`] -- Named catalog ids the rules key on
//! - [`report`] -- [`ErrorReport`] and the [`ErrorKey`] rule keys
//! - [`validation`] -- [`validate_ship`] and the individual rules

pub mod calculations;
pub mod catalog;
pub mod report;
pub mod validation;

// Re-export primary types at crate root for convenience.
pub use calculations::{Calculations, StandardCalculations};
pub use report::{ErrorKey, ErrorReport};
pub use validation::{validate, validate_ship};
