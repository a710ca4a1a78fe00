//! Shared types for the landing zone validator
//!
//! Contains the coordinate data model, zone identifiers, configuration and
//! tracing setup used by the webserver crate.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::ServerConfig;
pub use errors::*;
pub use types::*;
