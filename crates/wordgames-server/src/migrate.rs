//! `migrate` and `info` commands.

use tracing::info;
use wordgames_config::DatabaseConfig;
use wordgames_core::WordgamesResult;
use wordgames_repository::{DatabasePool, DatabasePoolInterface, MigrationReport};

/// Applies pending migrations and logs where the schema ended up.
pub async fn migrate(config: &DatabaseConfig) -> WordgamesResult<()> {
    let pool = DatabasePool::connect(config).await?;

    let executed = pool.run_migrations().await?;
    let report = pool.migration_info().await?;
    info!(
        "Executed {} migrations, now at version {}",
        executed,
        version_label(&report)
    );

    pool.close().await;
    Ok(())
}

/// Logs every known migration with its state.
pub async fn info(config: &DatabaseConfig) -> WordgamesResult<()> {
    let pool = DatabasePool::connect(config).await?;
    let report = pool.migration_info().await?;

    for line in describe(&report) {
        info!("{}", line);
    }

    pool.close().await;
    Ok(())
}

fn version_label(report: &MigrationReport) -> String {
    report
        .current_version()
        .map_or_else(|| "<none>".to_string(), |v| v.to_string())
}

/// One line per migration, e.g. `2  create words  applied  <- current`.
#[must_use]
pub fn describe(report: &MigrationReport) -> Vec<String> {
    let current = report.current_version();
    report
        .migrations
        .iter()
        .map(|m| {
            let state = if m.applied { "applied" } else { "pending" };
            let marker = if Some(m.version) == current { "  <- current" } else { "" };
            format!("{}  {}  {}{}", m.version, m.description, state, marker)
        })
        .collect()
}
