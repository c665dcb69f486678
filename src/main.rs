//! Payroll service binary.

use std::env;
use std::path::Path;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ServerConfig;

const DEFAULT_CONFIG_PATH: &str = "./config/server.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "-help" || arg == "--help") {
        println!("Usage: payroll-engine [OPTIONS]");
        println!("Options:");
        println!("  -config <path>  Path to configuration file (default: {DEFAULT_CONFIG_PATH})");
        println!("  -help, --help   Print this help message");
        return Ok(());
    }

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = args
        .iter()
        .skip_while(|arg| arg.as_str() != "-config")
        .nth(1);
    let config = match config_path {
        Some(path) => ServerConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => ServerConfig::load(DEFAULT_CONFIG_PATH)?,
        None => ServerConfig::default(),
    };

    let state = AppState::new();
    let router = create_router(state);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(address = %config.bind_address(), "Payroll service listening");
    axum::serve(listener, router).await?;

    Ok(())
}
