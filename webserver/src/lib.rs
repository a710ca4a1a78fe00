//! Webserver library for the landing zone validator
//!
//! Serves an HTTP API that reports whether a landing zone's rover surveys
//! agree: every coordinate rover R2 reported must also appear, at least as
//! often, in rover R1's report.

pub mod cli;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{CoordinateProvider, MockCoordinateProvider};

// Re-export service implementations
pub use services::{FileCoordinateProvider, GeneratedCoordinateProvider};
