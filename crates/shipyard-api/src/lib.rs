//! HTTP API for the Shipyard configurator.
//!
//! This crate wraps the rule engine in `shipyard-validation` with a small
//! Axum server:
//!
//! - **Validation endpoint** (`POST /api/ships/validate`) running every
//!   ship rule and returning the keyed error report
//! - **Catalog endpoints** serving select-list items for the wing and
//!   weapon pickers
//! - **Health endpoint** for liveness probes
//!
//! Configuration comes from `shipyard-config.yaml` ([`ShipyardConfig`]).

pub mod config;
pub mod error;
pub mod handlers;
pub mod presentation;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::{ConfigError, ShipyardConfig};
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
