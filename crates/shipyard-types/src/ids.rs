//! Type-safe catalog identifiers.
//!
//! Wings, weapons, and engines come from a fixed catalog and are referenced
//! by their numeric catalog id. Each entity gets its own newtype so a weapon
//! id can never be compared against an engine id by accident.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around a numeric catalog id with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub u32);

        impl $name {
            /// Create an identifier from its raw catalog value.
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Return the raw catalog value.
            pub const fn into_inner(self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Catalog identifier of a wing model.
    WingId
}

define_id! {
    /// Catalog identifier of a weapon model.
    WeaponId
}

define_id! {
    /// Catalog identifier of an engine model.
    EngineId
}

define_id! {
    /// Identifier of a user-assembled ship.
    ShipId
}
