use super::{MemoryWidgetDao, MemoryWordDao};
use crate::dao::{DaoFactory, WidgetDao, WordDao};
use crate::transaction::TxContext;
use shaku::Component;
use std::sync::Arc;

/// Hands out the same in-memory DAOs for every transaction context.
#[derive(Component, Debug, Default)]
#[shaku(interface = DaoFactory)]
pub struct MemoryDaoFactory {
    #[shaku(default)]
    widgets: Arc<MemoryWidgetDao>,
    #[shaku(default)]
    words: Arc<MemoryWordDao>,
}

impl MemoryDaoFactory {
    /// A factory over empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DaoFactory for MemoryDaoFactory {
    fn widget_dao(&self, _txn: &TxContext) -> Arc<dyn WidgetDao> {
        self.widgets.clone()
    }

    fn word_dao(&self, _txn: &TxContext) -> Arc<dyn WordDao> {
        self.words.clone()
    }
}
