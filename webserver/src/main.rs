//! Landing zone webserver entry point
//!
//! Configuration precedence: command line flags, then `LANDING_ZONE_*`
//! environment variables (a `.env` file is honoured), then defaults.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use tokio::signal;

use shared::{logging, service_info};
use webserver::cli::Args;
use webserver::{CoordinateProvider, FileCoordinateProvider, GeneratedCoordinateProvider, WebServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Args::parse().into_config().context("Loading configuration")?;

    let trace_endpoint = config
        .trace_endpoint
        .clone()
        .map(logging::TracingEndpoint::new);
    logging::init_tracing_with_endpoint_and_level(trace_endpoint, Some(&config.log_level));

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    match config.zones_file.clone() {
        Some(path) => {
            logging::log_startup(&format!("landing zone API with zone file {}", path.display()));
            serve(WebServer::new(FileCoordinateProvider::new(path)), addr).await
        }
        None => {
            logging::log_startup(&format!(
                "landing zone API with generated surveys (seed {}, R1 {}, R2 {})",
                config.seed, config.r1_len, config.r2_len
            ));
            let provider = GeneratedCoordinateProvider::from_config(&config)?;
            service_info!(valid_zone = %provider.valid_zone(), "Generated survey data");
            serve(WebServer::new(provider), addr).await
        }
    }
}

async fn serve<P>(server: WebServer<P>, addr: SocketAddr) -> anyhow::Result<()>
where
    P: CoordinateProvider + 'static,
{
    let shutdown_handle = server.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown("Received Ctrl+C signal");
                shutdown_handle.shutdown();
            }
            Err(err) => {
                logging::log_error("Signal handling", &err);
            }
        }
    });

    server
        .run(addr)
        .await
        .with_context(|| format!("Serving on {addr}"))?;

    logging::log_success("Landing zone API stopped gracefully");
    Ok(())
}
