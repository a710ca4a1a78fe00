//! REST API handlers
//!
//! Landing zone briefing and per-zone validity checks

use axum::{
    extract::{Path, State},
    response::Json,
};
use shared::{Zone, ZoneReport, service_debug, service_error, service_info, service_warn};

use crate::core::evaluate_zone;
use crate::error::{WebServerError, WebServerResult};
use crate::traits::CoordinateProvider;
use crate::webserver_impl::WebServer;

/// Plain-text description of the landing zone API
pub const BRIEFING: &str = "\
Two rovers surveyed ten candidate landing zones (Z1 through Z10) and reported \
the coordinates they found. Rover R1's report is trusted; rover R2's is not.

A zone is safe to land on when every coordinate R2 reported also appears in \
R1's report, at least as many times as R2 reported it.

GET /landing-zone/{zone} checks one zone and responds with \
{ \"zone\", \"isValid\", \"elapsedTime\" }, where elapsedTime is the time in \
milliseconds spent on the check.";

/// Briefing endpoint - GET /landing-zone
pub async fn landing_zone_briefing() -> &'static str {
    BRIEFING
}

/// Zone check endpoint - GET /landing-zone/:zone
pub async fn check_landing_zone<P>(
    State(server): State<WebServer<P>>,
    Path(raw_zone): Path<String>,
) -> WebServerResult<Json<ZoneReport>>
where
    P: CoordinateProvider + 'static,
{
    server.state().record_request();

    let zone: Zone = match raw_zone.parse() {
        Ok(zone) => zone,
        Err(_) => {
            service_warn!(value = %raw_zone, "Rejected zone parameter");
            return Err(WebServerError::InvalidZone { value: raw_zone });
        }
    };

    service_debug!(zone = %zone, source = server.provider().source_name(), "Fetching coordinates");
    let input = server.provider().get_coordinates(zone).await.map_err(|e| {
        service_error!(zone = %zone, error = %e, "Coordinate retrieval failed");
        e
    })?;

    let report = evaluate_zone(zone, &input).map_err(|e| {
        service_error!(zone = %zone, error = %e, "Evaluation failed");
        WebServerError::from(e)
    })?;
    server.state().record_result(report.is_valid);

    service_info!(
        zone = %zone,
        is_valid = report.is_valid,
        elapsed_ms = report.elapsed_time,
        r1_len = input.r1.len(),
        r2_len = input.r2.len(),
        "Landing zone evaluated"
    );

    Ok(Json(report))
}
