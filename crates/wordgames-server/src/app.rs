//! The `serve` command.

use crate::di::{build_memory_module, build_sql_module};
use crate::startup::{print_banner, print_startup_info};
use axum::Router;
use shaku::HasComponent;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use wordgames_config::{AppConfig, Persistence};
use wordgames_core::{WordgamesError, WordgamesResult};
use wordgames_repository::DatabasePoolInterface;
use wordgames_rest::create_router_from_module;

/// Picks the backend: `--in-memory` overrides the configured persistence.
#[must_use]
pub fn effective_persistence(config: &AppConfig, in_memory: bool) -> Persistence {
    if in_memory {
        Persistence::Memory
    } else {
        config.database.persistence
    }
}

/// Runs the HTTP server until Ctrl+C or SIGTERM.
pub async fn serve(config: AppConfig, in_memory: bool) -> WordgamesResult<()> {
    let started = Instant::now();
    print_banner();

    let persistence = effective_persistence(&config, in_memory);
    match persistence {
        Persistence::Postgres => {
            let module = build_sql_module(&config.database).await?;
            let pool: Arc<dyn DatabasePoolInterface> = module.resolve();
            let router = create_router_from_module(module.as_ref(), &config.server);

            let result = run_http(router, &config, persistence, started).await;
            pool.close().await;
            result
        }
        Persistence::Memory => {
            warn!("Using in-memory persistence; data is lost on shutdown");
            let module = build_memory_module();
            let router = create_router_from_module(module.as_ref(), &config.server);
            run_http(router, &config, persistence, started).await
        }
    }
}

async fn run_http(
    router: Router,
    config: &AppConfig,
    persistence: Persistence,
    started: Instant,
) -> WordgamesResult<()> {
    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| WordgamesError::Internal(format!("Failed to bind {addr}: {e}")))?;

    print_startup_info(&addr, persistence, started.elapsed());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WordgamesError::Internal(format!("REST server error: {e}")))?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
