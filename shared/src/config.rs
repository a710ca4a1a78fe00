//! Server configuration
//!
//! Defaults are overlaid by `LANDING_ZONE_*` environment variables;
//! `webserver::cli::Args` applies command line flags on top.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

const ENV_PREFIX: &str = "LANDING_ZONE_";

/// Landing zone webserver configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub trace_endpoint: Option<String>,
    /// JSON zone data; generated survey data is used when unset
    pub zones_file: Option<PathBuf>,
    pub seed: u64,
    pub r1_len: usize,
    pub r2_len: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            trace_endpoint: None,
            zones_file: None,
            seed: 42,
            r1_len: 10_000,
            r2_len: 2_000,
        }
    }
}

impl ServerConfig {
    /// Defaults overlaid with values from `lookup`, keyed by full variable name
    pub fn from_lookup<F>(lookup: F) -> SharedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));
        let mut config = Self::default();

        if let Some(host) = get("HOST") {
            config.host = host;
        }
        if let Some(port) = get("PORT") {
            config.port = parse_field("port", &port)?;
        }
        if let Some(level) = get("LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(endpoint) = get("TRACE_EP") {
            config.trace_endpoint = Some(endpoint);
        }
        if let Some(path) = get("ZONES_FILE") {
            config.zones_file = Some(PathBuf::from(path));
        }
        if let Some(seed) = get("SEED") {
            config.seed = parse_field("seed", &seed)?;
        }
        if let Some(len) = get("R1_LEN") {
            config.r1_len = parse_field("r1_len", &len)?;
        }
        if let Some(len) = get("R2_LEN") {
            config.r2_len = parse_field("r2_len", &len)?;
        }

        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> SharedResult<()> {
        if self.r2_len == 0 {
            return Err(SharedError::InvalidConfig {
                field: "r2_len".to_string(),
                value: "0".to_string(),
            });
        }
        if self.r2_len > self.r1_len {
            return Err(SharedError::InvalidConfig {
                field: "r2_len".to_string(),
                value: format!("{} (exceeds r1_len {})", self.r2_len, self.r1_len),
            });
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_field<T: FromStr>(field: &str, value: &str) -> SharedResult<T> {
    value.trim().parse().map_err(|_| SharedError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
    })
}
