//! Database connection pool management.

use async_trait::async_trait;
use shaku::Component;
use sqlx::migrate::{Migrate, Migrator};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::{ConnectOptions, Executor};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, info, warn};
use wordgames_config::DatabaseConfig;
use wordgames_core::{Interface, WordgamesError, WordgamesResult};

/// Schema migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Interface for database pool operations.
#[async_trait]
pub trait DatabasePoolInterface: Interface {
    /// Returns a reference to the underlying PostgreSQL pool.
    fn inner(&self) -> &PgPool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> WordgamesResult<()>;

    /// Applies pending migrations, returning how many ran.
    async fn run_migrations(&self) -> WordgamesResult<usize>;

    /// Reports which migrations are applied and which are pending.
    async fn migration_info(&self) -> WordgamesResult<MigrationReport>;

    /// Deletes every row from every application table.
    ///
    /// Intended for test fixtures; the schema is left in place.
    async fn delete_all_rows(&self) -> WordgamesResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// State of one known migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub version: i64,
    pub description: String,
    pub applied: bool,
}

/// Applied and pending migrations, in version order.
#[derive(Debug, Clone, Default)]
pub struct MigrationReport {
    pub migrations: Vec<MigrationStatus>,
}

impl MigrationReport {
    /// Highest applied version, if any migration has run.
    #[must_use]
    pub fn current_version(&self) -> Option<i64> {
        self.migrations
            .iter()
            .filter(|m| m.applied)
            .map(|m| m.version)
            .max()
    }

    /// Migrations not yet applied.
    pub fn pending(&self) -> impl Iterator<Item = &MigrationStatus> {
        self.migrations.iter().filter(|m| !m.applied)
    }
}

/// Database pool wrapper.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Connects a new pool using `config`.
    ///
    /// Every new connection runs `connection_init_sql` before it is handed
    /// out.
    pub async fn connect(config: &DatabaseConfig) -> WordgamesResult<Self> {
        info!("Connecting to PostgreSQL database...");

        let mut connect_options = PgConnectOptions::from_str(&config.url)
            .map_err(|e| WordgamesError::Configuration(format!("Invalid database URL: {e}")))?;
        if !config.log_queries {
            connect_options = connect_options.disable_statement_logging();
        }

        let mut pool_options = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()));

        if let Some(init_sql) = config.connection_init_sql.clone() {
            debug!("Connections will run init SQL: {}", init_sql);
            pool_options = pool_options.after_connect(move |conn, _meta| {
                let init_sql = init_sql.clone();
                Box::pin(async move {
                    conn.execute(init_sql.as_str()).await?;
                    Ok(())
                })
            });
        }

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                WordgamesError::Database(format!("Failed to connect: {e}"))
            })?;

        info!(
            max_connections = config.max_connections,
            "PostgreSQL connection pool established"
        );
        Ok(Self { pool })
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &PgPool {
        &self.pool
    }

    async fn health_check(&self) -> WordgamesResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| WordgamesError::Database(format!("Health check failed: {e}")))?;
        Ok(())
    }

    async fn run_migrations(&self) -> WordgamesResult<usize> {
        let pending = self.migration_info().await?.pending().count();
        info!("Running database migrations ({} pending)...", pending);
        MIGRATOR.run(&self.pool).await?;
        info!("Database migrations completed");
        Ok(pending)
    }

    async fn migration_info(&self) -> WordgamesResult<MigrationReport> {
        let mut conn = self.pool.acquire().await?;
        conn.ensure_migrations_table().await?;
        let applied: HashSet<i64> = conn
            .list_applied_migrations()
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        let migrations = MIGRATOR
            .iter()
            .filter(|m| !m.migration_type.is_down_migration())
            .map(|m| MigrationStatus {
                version: m.version,
                description: m.description.to_string(),
                applied: applied.contains(&m.version),
            })
            .collect();

        Ok(MigrationReport { migrations })
    }

    async fn delete_all_rows(&self) -> WordgamesResult<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM widgets").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM words").execute(&mut *tx).await?;
        tx.commit().await?;
        debug!("Deleted all rows from application tables");
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}
