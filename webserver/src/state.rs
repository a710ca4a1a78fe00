//! Webserver state management
//!
//! Process-lifetime counters reported by the health endpoint. No coordinate
//! data is kept between requests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    pub server_start_time: Instant,
    requests: AtomicU64,
    valid_zones: AtomicU64,
    invalid_zones: AtomicU64,
}

impl WebServerState {
    pub fn new() -> Self {
        Self {
            server_start_time: Instant::now(),
            requests: AtomicU64::new(0),
            valid_zones: AtomicU64::new(0),
            invalid_zones: AtomicU64::new(0),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Count a zone request, including rejected ones
    pub fn record_request(&self) -> u64 {
        self.requests.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Count a completed evaluation
    pub fn record_result(&self, is_valid: bool) {
        let counter = if is_valid { &self.valid_zones } else { &self.invalid_zones };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn valid_count(&self) -> u64 {
        self.valid_zones.load(Ordering::Relaxed)
    }

    pub fn invalid_count(&self) -> u64 {
        self.invalid_zones.load(Ordering::Relaxed)
    }
}

impl Default for WebServerState {
    fn default() -> Self {
        Self::new()
    }
}
