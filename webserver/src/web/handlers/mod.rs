pub mod api;
pub mod health;

pub use api::{check_landing_zone, landing_zone_briefing};
pub use health::health_check;
