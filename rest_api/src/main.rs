// rest_api/src/main.rs

// Entry point for the Liver Disease Prediction REST API.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use lib::{load_database_config, Database, StorageEngineType};
use rest_api::config::load_rest_api_config;
use rest_api::start_server;

#[derive(Parser, Debug)]
#[command(name = "rest_api")]
#[command(version = "0.1.0")]
#[command(about = "Liver Disease Prediction REST API")]
struct Args {
    /// Address to bind (overrides REST_API_HOST)
    #[arg(long, value_name = "HOST")]
    host: Option<String>,
    /// Port to bind (overrides REST_API_PORT)
    #[arg(short = 'p', long = "port", value_name = "PORT")]
    port: Option<u16>,
    /// Storage backend: mysql or inmemory (overrides DATABASE_ENGINE)
    #[arg(long, value_name = "ENGINE")]
    engine: Option<StorageEngineType>,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    info!("Ctrl+C received, shutting down.");
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Reads .env first so the REST_API_* values below can come from it too.
    let mut db_config = load_database_config().context("Failed to load database configuration")?;
    let mut api_config = load_rest_api_config()?;

    if let Some(host) = args.host {
        api_config.host = host;
    }
    if let Some(port) = args.port {
        api_config.port = port;
    }
    if let Some(engine) = args.engine {
        db_config.engine = engine;
    }

    let db = Database::new(&db_config)
        .await
        .context(format!("Failed to open {} datastore", db_config.engine))?;

    start_server(api_config, db, shutdown_signal()).await
}
