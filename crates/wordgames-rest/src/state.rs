//! Application state for Axum handlers.

use shaku::HasComponent;
use std::future::Future;
use std::sync::Arc;
use wordgames_core::WordgamesResult;
use wordgames_repository::{txn_with_dao, DaoFactory, TransactionProvider, WidgetDao, WordDao};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub txn: Arc<dyn TransactionProvider>,
    pub daos: Arc<dyn DaoFactory>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(txn: Arc<dyn TransactionProvider>, daos: Arc<dyn DaoFactory>) -> Self {
        Self { txn, daos }
    }

    /// Resolves the transaction provider and DAO factory from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: HasComponent<dyn TransactionProvider> + HasComponent<dyn DaoFactory>,
    {
        Self::new(module.resolve(), module.resolve())
    }

    /// Runs `block` with a widget DAO inside one transaction.
    pub async fn widgets<T, F, Fut>(&self, block: F) -> WordgamesResult<T>
    where
        F: FnOnce(Arc<dyn WidgetDao>) -> Fut,
        Fut: Future<Output = WordgamesResult<T>>,
    {
        txn_with_dao(self.txn.as_ref(), |txn| self.daos.widget_dao(txn), block).await
    }

    /// Runs `block` with a word DAO inside one transaction.
    pub async fn words<T, F, Fut>(&self, block: F) -> WordgamesResult<T>
    where
        F: FnOnce(Arc<dyn WordDao>) -> Fut,
        Fut: Future<Output = WordgamesResult<T>>,
    {
        txn_with_dao(self.txn.as_ref(), |txn| self.daos.word_dao(txn), block).await
    }
}
