//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod containment;
pub mod evaluation;

pub use containment::{CoordinateCounts, is_valid_landing_zone};
pub use evaluation::evaluate_zone;
