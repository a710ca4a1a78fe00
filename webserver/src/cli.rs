//! Command line arguments
//!
//! Flags override `LANDING_ZONE_*` environment variables, which override the
//! `ServerConfig` defaults.

use clap::Parser;
use std::path::PathBuf;

use shared::{ServerConfig, SharedResult};

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Checks rover coordinate reports for landing zones Z1..Z10")]
pub struct Args {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port for HTTP server
    #[arg(long)]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Tracing endpoint URL (if set, traces will be sent here)
    #[arg(long)]
    pub trace_ep: Option<String>,

    /// JSON file with R1/R2 reports per zone; generated data is used otherwise
    #[arg(long)]
    pub zones_file: Option<PathBuf>,

    /// Seed for generated survey data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Coordinates per generated R1 report
    #[arg(long)]
    pub r1_len: Option<usize>,

    /// Coordinates per generated R2 report
    #[arg(long)]
    pub r2_len: Option<usize>,
}

impl Args {
    /// Overwrite every field that was given on the command line
    pub fn apply(self, config: &mut ServerConfig) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(endpoint) = self.trace_ep {
            config.trace_endpoint = Some(endpoint);
        }
        if let Some(path) = self.zones_file {
            config.zones_file = Some(path);
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(len) = self.r1_len {
            config.r1_len = len;
        }
        if let Some(len) = self.r2_len {
            config.r2_len = len;
        }
    }

    /// Defaults, then the process environment, then these flags; validated
    pub fn into_config(self) -> SharedResult<ServerConfig> {
        self.into_config_with(|key| std::env::var(key).ok())
    }

    /// Same layering as `into_config` with environment values from `lookup`
    pub fn into_config_with<F>(self, lookup: F) -> SharedResult<ServerConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::from_lookup(lookup)?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}
