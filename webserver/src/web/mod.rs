//! HTTP layer: request handlers for the landing zone API

pub mod handlers;
