//! Service tests for webserver
//!
//! Tests for the coordinate provider implementations.

pub mod file_provider;
pub mod generated_provider;
