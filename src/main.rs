//! Serves the payroll calculator API.

use std::env;

use payroll_engine::api::create_router;
use payroll_engine::config::ConfigLoader;
use tracing::info;

const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("PAYROLL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_dir =
        env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let bind_address = config.server().bind_address.clone();

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(
        config_dir = %config_dir,
        bind_address = %bind_address,
        known_messages = config.messages().messages.len(),
        "Payroll calculator API listening"
    );
    axum::serve(listener, create_router()).await?;

    Ok(())
}
