//! Health check handler

use axum::{extract::State, response::Json};
use chrono::Utc;
use serde_json::{Value, json};

use crate::traits::CoordinateProvider;
use crate::webserver_impl::WebServer;

/// Health endpoint - GET /health
pub async fn health_check<P>(State(server): State<WebServer<P>>) -> Json<Value>
where
    P: CoordinateProvider + 'static,
{
    let state = server.state();
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "uptime": state.get_uptime_seconds(),
        "requests": state.request_count(),
        "validZones": state.valid_count(),
        "invalidZones": state.invalid_count(),
        "source": server.provider().source_name(),
    }))
}
