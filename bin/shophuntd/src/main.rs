//! `shophuntd` — the Shop Hunt catalog server.
//!
//! Usage:
//!   shophuntd [--listen <addr>]
//!
//! Database credentials come from the environment:
//!   SHOPHUNT_DB_URL, SHOPHUNT_DB_ANON_KEY, SHOPHUNT_DB_SERVICE_KEY

mod access_gate;
mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use catalog::{CatalogModule, CatalogService};
use shophunt_core::Module;
use shophunt_db::{DbStore, RestStore};

use config::ServerConfig;

/// Shop Hunt catalog server.
#[derive(Parser, Debug)]
#[command(name = "shophuntd", about = "Shop Hunt catalog server")]
struct Cli {
    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration from the environment.
    let server_config = ServerConfig::from_env()?;
    info!("Using database at {}", server_config.db_url);

    // Two remote clients: standard authorization for public reads,
    // elevated authorization for admin writes.
    let db: Arc<dyn DbStore> = Arc::new(RestStore::new(
        &server_config.db_url,
        &server_config.anon_key,
    )?);
    let db_admin: Arc<dyn DbStore> = Arc::new(RestStore::new(
        &server_config.db_url,
        &server_config.service_key,
    )?);

    let catalog_module = CatalogModule::new(Arc::new(CatalogService::new(db, db_admin)));
    info!("Catalog module initialized");

    // Build router.
    let app = routes::build_router(&[&catalog_module as &dyn Module]);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("Shop Hunt server listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
