mod config;
mod error;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use thinu_core::{MealSpeechlet, SpeechletRequestHandler, TracedSpeechlet};
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

use crate::config::Config;

#[derive(Parser)]
#[command(version, about = "Meal report voice skill endpoint")]
struct Cli {
    /// Address to listen on. Overrides BIND_ADDRESS.
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // --- 1. Load Configuration ---
    let args = Cli::parse();
    let config = Config::from_env().context("Failed to load application configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(ChronoLocal::rfc_3339())
        .init();

    let supported: Vec<&str> = config.supported_applications.iter().collect();
    info!(?supported, "Supported application ids");

    // --- 3. Build the skill ---
    let handler = SpeechletRequestHandler::new(
        TracedSpeechlet::new(MealSpeechlet::new()),
        config.supported_applications.clone(),
    );
    let app = routes::router(Arc::new(handler));

    // --- 4. Serve ---
    let addr = args.bind.unwrap_or(config.bind_address);
    info!("Starting skill server, listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Skill server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
