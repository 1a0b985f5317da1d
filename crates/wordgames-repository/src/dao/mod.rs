//! DAO (Data Access Object) layer.
//!
//! A DAO is a short-lived view of one table through one transaction:
//!
//! ```text
//! REST handler → txn_with_dao → DaoFactory → WidgetDao / WordDao → PostgreSQL | memory
//! ```
//!
//! Nothing outside a DAO touches SQL or the in-memory maps.

pub mod factory;
pub mod r#impl;
pub mod widget_dao;
pub mod word_dao;

pub use factory::DaoFactory;
pub use r#impl::memory::{MemoryDaoFactory, MemoryWidgetDao, MemoryWordDao};
pub use r#impl::postgres::{PgWidgetDao, PgWordDao, SqlDaoFactory};
pub use widget_dao::WidgetDao;
pub use word_dao::WordDao;
