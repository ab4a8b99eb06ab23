//! # powerhubd — powerhub daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialise the `tracing` subscriber
//! - Construct the PDU client backend
//! - Construct the power service, injecting the client via the port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use powerhub_adapter_http_axum::state::AppState;
use powerhub_adapter_virtual::VirtualController;
use powerhub_app::services::PowerService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Backend: simulated controller until a hardware-facing client lands.
    // Swapping it for a real one only touches this block.
    let controller = VirtualController::new(&config.power.username, &config.power.password)
        .with_pdu("power1", 8)
        .with_pdu("power2", 4);

    let service = PowerService::new(controller, config.credentials());
    let state = AppState::new(service);
    let app = powerhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(
        addr = %bind_addr,
        base_url = %config.power.base_url,
        username = %config.power.username,
        "powerhubd listening"
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown handler");
    }
}
