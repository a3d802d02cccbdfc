mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use harvest_client::{HhClient, SourceConfig};
use harvest_db::{Database, DbConfig};

/// Loads employers and vacancies from hh.ru into PostgreSQL, then opens an
/// interactive menu of queries over them.
///
/// Configuration comes from the environment (or a `.env` file):
/// DB_HOST, DB_NAME, DB_USER, DB_PASSWORD, DB_PORT, HH_EMPLOYER_IDS, HH_BASE_URL.
#[derive(Parser)]
#[command(name = "harvest", version, about)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("harvest=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    let db_config = DbConfig::from_env()?;
    let source_config = SourceConfig::from_env()?;

    Database::ensure_database_exists(&db_config)
        .await
        .context("Failed to create database")?;

    let db = Database::connect(&db_config)
        .await
        .context("Failed to connect to database")?;

    let result = run(&db, &source_config).await;
    db.close().await;
    result
}

async fn run(db: &Database, source_config: &SourceConfig) -> Result<()> {
    db.ensure_tables_exist()
        .await
        .context("Failed to create tables")?;

    let client = HhClient::with_base_url(&source_config.base_url)?;

    tracing::info!(
        employers = source_config.employer_ids.len(),
        "Refreshing vacancy data from {}",
        source_config.base_url
    );
    db.loader(client)
        .refresh(&source_config.employer_ids)
        .await
        .context("Failed to refresh vacancy data")?;

    let stdin = std::io::stdin();
    shell::run(&db.queries(), stdin.lock(), std::io::stdout()).await
}
