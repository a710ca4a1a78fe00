//! Shared logging utilities for consistent tracing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{Event, Subscriber, error, info};
use tracing_subscriber::layer::Context;

/// Value of the `service` field attached by the `service_*` macros
pub const SERVICE_NAME: &str = "landing-zone";

/// Tracing endpoint configuration
#[derive(Debug, Clone)]
pub struct TracingEndpoint {
    pub url: String,
    pub batch_size: usize,
    pub flush_interval: Duration,
}

impl TracingEndpoint {
    pub fn new(url: String) -> Self {
        Self {
            url,
            batch_size: 5,
            flush_interval: Duration::from_millis(500),
        }
    }
}

/// Structured trace event for HTTP endpoint
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TraceEvent {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub target: String,
    pub message: String,
    pub service: String,
    pub fields: HashMap<String, serde_json::Value>,
}

/// HTTP tracing layer that sends trace events to a remote endpoint.
///
/// Must be constructed inside a tokio runtime; batching runs on a spawned task.
pub struct HttpTracingLayer {
    sender: mpsc::UnboundedSender<TraceEvent>,
}

impl HttpTracingLayer {
    pub fn new(endpoint: TracingEndpoint) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<TraceEvent>();

        let endpoint_url = endpoint.url.clone();
        let batch_size = endpoint.batch_size;
        let flush_interval = endpoint.flush_interval;

        tokio::spawn(async move {
            let client = reqwest::Client::new();
            let mut events_buffer = Vec::with_capacity(batch_size);
            let mut flush_timer = tokio::time::interval(flush_interval);

            loop {
                tokio::select! {
                    event = rx.recv() => {
                        match event {
                            Some(event) => {
                                events_buffer.push(event);
                                if events_buffer.len() >= batch_size {
                                    Self::send_batch(&client, &endpoint_url, &mut events_buffer).await;
                                }
                            }
                            None => {
                                if !events_buffer.is_empty() {
                                    Self::send_batch(&client, &endpoint_url, &mut events_buffer).await;
                                }
                                break;
                            }
                        }
                    }

                    _ = flush_timer.tick() => {
                        if !events_buffer.is_empty() {
                            Self::send_batch(&client, &endpoint_url, &mut events_buffer).await;
                        }
                    }
                }
            }
        });

        HttpTracingLayer { sender: tx }
    }

    async fn send_batch(client: &reqwest::Client, endpoint_url: &str, events_buffer: &mut Vec<TraceEvent>) {
        let batch = std::mem::take(events_buffer);

        // Logging failures through tracing would feed back into this layer
        match client.post(endpoint_url).json(&batch).send().await {
            Ok(response) if !response.status().is_success() => {
                eprintln!("Failed to send trace batch: HTTP {}", response.status());
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to send trace batch: {e}");
            }
        }
    }
}

impl<S> tracing_subscriber::Layer<S> for HttpTracingLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut fields = HashMap::new();
        let mut message = String::new();

        let mut visitor = TraceVisitor {
            message: &mut message,
            fields: &mut fields,
        };
        event.record(&mut visitor);

        // Only events emitted through the service_* macros are forwarded
        if !fields.contains_key("service") {
            return;
        }

        let trace_event = TraceEvent {
            timestamp: Utc::now(),
            level: metadata.level().to_string(),
            target: metadata.target().to_string(),
            message,
            service: SERVICE_NAME.to_string(),
            fields,
        };

        let _ = self.sender.send(trace_event);
    }
}

/// Visitor to extract event fields and message
struct TraceVisitor<'a> {
    message: &'a mut String,
    fields: &'a mut HashMap<String, serde_json::Value>,
}

impl tracing::field::Visit for TraceVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message.push_str(&format!("{value:?}"));
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(format!("{value:?}")),
            );
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::Value::Number(serde_json::Number::from(value)),
        );
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        if let Some(number) = serde_json::Number::from_f64(value) {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::Number(number));
        }
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::Value::Number(serde_json::Number::from(value)),
        );
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Bool(value));
    }
}

/// Filter directives for the webserver and its HTTP stack
pub fn filter_directives(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("webserver={base_level},shared={base_level},tower_http=debug,axum={base_level}")
}

/// Initialize tracing subscriber with optional endpoint and log level
pub fn init_tracing_with_endpoint_and_level(endpoint: Option<TracingEndpoint>, log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level_filter = filter_directives(log_level);
    let env_filter = EnvFilter::new(&level_filter);

    match endpoint {
        Some(endpoint) => {
            println!("Tracing endpoint configured: {}", endpoint.url);

            let http_layer = HttpTracingLayer::new(endpoint);
            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(http_layer)
                .with(fmt_layer)
                .init();
        }
        None => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .init();
        }
    }
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for service-tagged info logging
#[macro_export]
macro_rules! service_info {
    ($($arg:tt)*) => {
        tracing::info!(
            service = $crate::logging::SERVICE_NAME,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-tagged warning logging
#[macro_export]
macro_rules! service_warn {
    ($($arg:tt)*) => {
        tracing::warn!(
            service = $crate::logging::SERVICE_NAME,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-tagged error logging
#[macro_export]
macro_rules! service_error {
    ($($arg:tt)*) => {
        tracing::error!(
            service = $crate::logging::SERVICE_NAME,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-tagged debug logging
#[macro_export]
macro_rules! service_debug {
    ($($arg:tt)*) => {
        tracing::debug!(
            service = $crate::logging::SERVICE_NAME,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

pub fn log_startup(details: &str) {
    info!(
        service = SERVICE_NAME,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

pub fn log_shutdown(reason: &str) {
    info!(
        service = SERVICE_NAME,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        service = SERVICE_NAME,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

pub fn log_success(message: &str) {
    info!(
        service = SERVICE_NAME,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
