//! # Wordgames Server
//!
//! Main entry point. Subcommands:
//! - `serve`: run the HTTP API over PostgreSQL (or memory with `--in-memory`)
//! - `migrate`: apply database migrations
//! - `info`: list applied and pending migrations

use anyhow::Context;
use clap::Parser;
use std::time::Instant;
use tracing::{error, info};
use wordgames_config::{ConfigLoader, Persistence};
use wordgames_server::{
    app::serve,
    cli::{Cli, Command},
    logging::init_logging,
    migrate,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("Application error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let started = Instant::now();

    let override_dir = cli.command.config_args().config_dir.clone();
    let config = ConfigLoader::from_default_location(override_dir)
        .context("Failed to load configuration")?
        .get();

    init_logging(&config.observability)?;

    info!("Starting Wordgames {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    match cli.command {
        Command::Serve(args) => {
            serve(config, args.in_memory).await?;
        }
        Command::Migrate(_) => {
            require_postgres(config.database.persistence)?;
            migrate::migrate(&config.database).await?;
        }
        Command::Info(_) => {
            require_postgres(config.database.persistence)?;
            migrate::info(&config.database).await?;
        }
    }

    info!("Finished in {} ms", started.elapsed().as_millis());
    Ok(())
}

fn require_postgres(persistence: Persistence) -> anyhow::Result<()> {
    if persistence == Persistence::Memory {
        anyhow::bail!("database.persistence is 'memory'; migrations only apply to PostgreSQL");
    }
    Ok(())
}
