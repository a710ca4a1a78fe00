//! Service trait definitions for dependency injection
//!
//! Coordinate retrieval is abstracted behind this trait for testability

use async_trait::async_trait;
use shared::{LandingZoneInput, Zone};

use crate::error::WebServerResult;

/// Source of rover coordinate reports
#[mockall::automock]
#[async_trait]
pub trait CoordinateProvider: Send + Sync {
    /// Fetch both rover reports for `zone`; the caller owns the result
    async fn get_coordinates(&self, zone: Zone) -> WebServerResult<LandingZoneInput>;

    /// Short name of the backing source for logs and health output
    fn source_name(&self) -> &'static str;
}
