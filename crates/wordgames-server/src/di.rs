//! Dependency injection modules using Shaku.
//!
//! - `SqlModule`: PostgreSQL pool, transactions and DAOs
//! - `MemoryModule`: detached transactions over in-memory DAOs

use shaku::module;
use std::sync::Arc;
use wordgames_config::DatabaseConfig;
use wordgames_core::WordgamesResult;
use wordgames_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, DetachedTransactionProvider,
    MemoryDaoFactory, PgTransactionProvider, SqlDaoFactory,
};

// PostgreSQL-backed module. The pool is injected into the transaction
// provider; the DAO factory builds DAOs on each transaction.
module! {
    pub SqlModule {
        components = [
            DatabasePool,
            PgTransactionProvider,
            SqlDaoFactory,
        ],
        providers = [],
    }
}

// In-memory module; nothing survives a restart.
module! {
    pub MemoryModule {
        components = [
            DetachedTransactionProvider,
            MemoryDaoFactory,
        ],
        providers = [],
    }
}

/// Connects to PostgreSQL and builds the SQL module around the pool.
pub async fn build_sql_module(db_config: &DatabaseConfig) -> WordgamesResult<Arc<SqlModule>> {
    let pool = DatabasePool::connect(db_config).await?;
    Ok(Arc::new(sql_module_with_pool(pool)))
}

/// Builds the SQL module around an existing pool.
#[must_use]
pub fn sql_module_with_pool(pool: DatabasePool) -> SqlModule {
    SqlModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: pool.inner().clone(),
        })
        .build()
}

/// Builds the in-memory module over empty tables.
#[must_use]
pub fn build_memory_module() -> Arc<MemoryModule> {
    Arc::new(MemoryModule::builder().build())
}
