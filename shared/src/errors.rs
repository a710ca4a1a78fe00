//! Shared error types for the landing zone validator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Not a valid zone: {input}")]
    InvalidZone { input: String },

    #[error("Invalid coordinate in {set} at index {index}: ({x}, {y})")]
    InvalidCoordinate {
        set: &'static str,
        index: usize,
        x: f64,
        y: f64,
    },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
