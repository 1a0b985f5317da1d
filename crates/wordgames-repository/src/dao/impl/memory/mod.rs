//! In-memory DAOs for tests and for running without a database.
//!
//! State lives in one shared table per entity and outlives any transaction
//! context; nothing is ever rolled back.

mod factory;
mod table;
mod widget_dao_impl;
mod word_dao_impl;

pub use factory::MemoryDaoFactory;
pub use widget_dao_impl::MemoryWidgetDao;
pub use word_dao_impl::MemoryWordDao;
