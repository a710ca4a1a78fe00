//! WebServer-specific error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use shared::{SharedError, Zone};
use thiserror::Error;

/// Message returned for a zone parameter outside `Z1`..`Z10`
pub const INVALID_ZONE_MESSAGE: &str = "Not a valid zone";

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Not a valid zone: {value}")]
    InvalidZone { value: String },

    #[error("No coordinate data for zone {zone}")]
    ZoneDataMissing { zone: Zone },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl WebServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::InvalidZone { .. } => StatusCode::BAD_REQUEST,
            WebServerError::ZoneDataMissing { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            WebServerError::InvalidZone { value } => json!({
                "errors": [{
                    "type": "field",
                    "value": value,
                    "msg": INVALID_ZONE_MESSAGE,
                    "path": "zone",
                    "location": "params",
                }]
            }),
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
