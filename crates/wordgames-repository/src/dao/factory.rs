//! Builds DAOs bound to a transaction context.

use crate::dao::{WidgetDao, WordDao};
use crate::transaction::TxContext;
use std::sync::Arc;
use wordgames_core::Interface;

/// Chooses which backend the DAOs talk to.
///
/// The factory is the single switch between persistence backends; callers
/// only ever see the DAO traits.
pub trait DaoFactory: Interface {
    /// A widget DAO issuing its work through `txn`.
    fn widget_dao(&self, txn: &TxContext) -> Arc<dyn WidgetDao>;

    /// A word DAO issuing its work through `txn`.
    fn word_dao(&self, txn: &TxContext) -> Arc<dyn WordDao>;
}
