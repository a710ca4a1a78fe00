//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod file_provider;
pub mod generated_provider;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use file_provider::FileCoordinateProvider;
pub use generated_provider::{Corruption, GeneratedCoordinateProvider};
