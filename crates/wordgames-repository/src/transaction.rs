//! Transaction boundaries for units of work.
//!
//! A [`TransactionProvider`] hands out [`TxContext`]s. A DAO built from a
//! context issues every statement through it, and [`txn_with_dao`] decides
//! whether the work is committed or rolled back.

use crate::pool::DatabasePoolInterface;
use async_trait::async_trait;
use shaku::Component;
use sqlx::{Postgres, Transaction};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};
use wordgames_core::{Interface, WordgamesError, WordgamesResult};

/// An in-flight PostgreSQL transaction owning its pooled connection.
pub type PgTransaction = Transaction<'static, Postgres>;

/// Handle to one unit of work.
///
/// Cloning is cheap and every clone refers to the same transaction. A
/// detached context carries no connection at all; it is what the in-memory
/// backend runs under.
#[derive(Clone)]
pub struct TxContext {
    tx: Option<Arc<Mutex<PgTransaction>>>,
}

impl TxContext {
    /// A context with no database behind it.
    #[must_use]
    pub fn detached() -> Self {
        Self { tx: None }
    }

    /// Wraps a freshly begun PostgreSQL transaction.
    #[must_use]
    pub fn postgres(tx: PgTransaction) -> Self {
        Self {
            tx: Some(Arc::new(Mutex::new(tx))),
        }
    }

    /// Returns `true` when no database transaction backs this context.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.tx.is_none()
    }

    /// Locks the underlying transaction for one statement.
    ///
    /// Statements on one transaction run one at a time.
    pub async fn lock(&self) -> WordgamesResult<MutexGuard<'_, PgTransaction>> {
        let tx = self.tx.as_ref().ok_or_else(|| {
            WordgamesError::internal("SQL DAO used with a transaction context that has no database connection")
        })?;
        Ok(tx.lock().await)
    }

    /// Takes the transaction back out so it can be committed or rolled back.
    ///
    /// Fails if a clone of this context (usually a DAO) is still alive.
    pub fn into_transaction(self) -> WordgamesResult<Option<PgTransaction>> {
        match self.tx {
            None => Ok(None),
            Some(shared) => Arc::try_unwrap(shared)
                .map(|tx| Some(tx.into_inner()))
                .map_err(|_| {
                    WordgamesError::internal(
                        "transaction is still referenced by a DAO and cannot be finished",
                    )
                }),
        }
    }
}

impl std::fmt::Debug for TxContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TxContext")
            .field("detached", &self.is_detached())
            .finish()
    }
}

/// Source of transaction contexts.
#[async_trait]
pub trait TransactionProvider: Interface {
    /// Begins a unit of work.
    async fn begin(&self) -> WordgamesResult<TxContext>;

    /// Makes the unit of work durable and visible to others.
    async fn commit(&self, ctx: TxContext) -> WordgamesResult<()>;

    /// Discards the unit of work.
    async fn rollback(&self, ctx: TxContext) -> WordgamesResult<()>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> WordgamesResult<()>;
}

/// Runs `block` against a DAO bound to a fresh transaction.
///
/// The transaction is committed when `block` returns `Ok` and rolled back
/// when it returns `Err`; the error is then handed back unchanged. A commit
/// failure is returned in place of the block's value.
///
/// ```ignore
/// let widget = txn_with_dao(
///     provider.as_ref(),
///     |txn| daos.widget_dao(txn),
///     |dao| async move { dao.create("sprocket").await },
/// )
/// .await?;
/// ```
pub async fn txn_with_dao<P, D, B, F, Fut, T>(
    provider: &P,
    dao_builder: B,
    block: F,
) -> WordgamesResult<T>
where
    P: TransactionProvider + ?Sized,
    B: FnOnce(&TxContext) -> D,
    F: FnOnce(D) -> Fut,
    Fut: Future<Output = WordgamesResult<T>>,
{
    let ctx = provider.begin().await?;
    let dao = dao_builder(&ctx);

    // the DAO moves into the block and is gone once it finishes
    let outcome = block(dao).await;

    match outcome {
        Ok(value) => {
            provider.commit(ctx).await?;
            Ok(value)
        }
        Err(err) => {
            debug!("Rolling back transaction after error: {}", err);
            if let Err(rollback_err) = provider.rollback(ctx).await {
                warn!("Rollback failed: {}", rollback_err);
            }
            Err(err)
        }
    }
}

/// Transactions backed by the PostgreSQL connection pool.
#[derive(Component)]
#[shaku(interface = TransactionProvider)]
pub struct PgTransactionProvider {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgTransactionProvider {
    /// Creates a provider drawing connections from `pool`.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionProvider for PgTransactionProvider {
    async fn begin(&self) -> WordgamesResult<TxContext> {
        let tx = self.pool.inner().begin().await?;
        Ok(TxContext::postgres(tx))
    }

    async fn commit(&self, ctx: TxContext) -> WordgamesResult<()> {
        match ctx.into_transaction()? {
            Some(tx) => {
                tx.commit().await?;
                Ok(())
            }
            None => Err(WordgamesError::internal(
                "cannot commit a detached context through the PostgreSQL provider",
            )),
        }
    }

    async fn rollback(&self, ctx: TxContext) -> WordgamesResult<()> {
        match ctx.into_transaction() {
            Ok(Some(tx)) => {
                tx.rollback().await?;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                // sqlx rolls back when the last handle drops
                warn!("{}; rollback deferred until it is dropped", err);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> WordgamesResult<()> {
        self.pool.health_check().await
    }
}

impl std::fmt::Debug for PgTransactionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgTransactionProvider").finish_non_exhaustive()
    }
}

/// Transaction boundaries for the in-memory backend.
///
/// Every context is detached and commit/rollback do nothing, so work run
/// under this provider is never undone.
#[derive(Component, Debug, Default)]
#[shaku(interface = TransactionProvider)]
pub struct DetachedTransactionProvider {}

#[async_trait]
impl TransactionProvider for DetachedTransactionProvider {
    async fn begin(&self) -> WordgamesResult<TxContext> {
        Ok(TxContext::detached())
    }

    async fn commit(&self, _ctx: TxContext) -> WordgamesResult<()> {
        Ok(())
    }

    async fn rollback(&self, _ctx: TxContext) -> WordgamesResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> WordgamesResult<()> {
        Ok(())
    }
}
