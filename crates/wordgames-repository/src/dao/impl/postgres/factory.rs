use crate::dao::{DaoFactory, PgWidgetDao, PgWordDao, WidgetDao, WordDao};
use crate::transaction::TxContext;
use shaku::Component;
use std::sync::Arc;

/// Hands out PostgreSQL DAOs; each one shares the caller's transaction.
#[derive(Component, Debug, Default)]
#[shaku(interface = DaoFactory)]
pub struct SqlDaoFactory {}

impl DaoFactory for SqlDaoFactory {
    fn widget_dao(&self, txn: &TxContext) -> Arc<dyn WidgetDao> {
        Arc::new(PgWidgetDao::new(txn.clone()))
    }

    fn word_dao(&self, txn: &TxContext) -> Arc<dyn WordDao> {
        Arc::new(PgWordDao::new(txn.clone()))
    }
}
