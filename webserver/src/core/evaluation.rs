//! Timed zone evaluation

use std::time::Instant;

use shared::{LandingZoneInput, SharedResult, Zone, ZoneReport};

use super::containment::is_valid_landing_zone;

/// Run the containment check for `zone` and time only the check itself
pub fn evaluate_zone(zone: Zone, input: &LandingZoneInput) -> SharedResult<ZoneReport> {
    let start = Instant::now();
    let is_valid = is_valid_landing_zone(input)?;
    let elapsed = start.elapsed();

    Ok(ZoneReport {
        zone,
        is_valid,
        elapsed_time: elapsed.as_secs_f64() * 1000.0,
    })
}
