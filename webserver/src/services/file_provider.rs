//! Coordinate provider reading zone reports from a JSON file
//!
//! Expected shape: `{ "Z1": { "R1": [[x, y], ...], "R2": [[x, y], ...] }, ... }`.
//! The file is re-read on every request.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use shared::{LandingZoneInput, Zone};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::CoordinateProvider;

#[derive(Debug, Clone)]
pub struct FileCoordinateProvider {
    path: PathBuf,
}

impl FileCoordinateProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CoordinateProvider for FileCoordinateProvider {
    async fn get_coordinates(&self, zone: Zone) -> WebServerResult<LandingZoneInput> {
        let raw = fs::read_to_string(&self.path).await?;
        let mut zones: HashMap<String, LandingZoneInput> = serde_json::from_str(&raw)?;

        zones
            .remove(zone.as_str())
            .ok_or(WebServerError::ZoneDataMissing { zone })
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
