//! # Wordgames Repository
//!
//! Data access for widgets and words:
//!
//! ```text
//! REST handler
//!   ↓  txn_with_dao(provider, |txn| factory.widget_dao(txn), |dao| ...)
//! TransactionProvider           (begin / commit / rollback)
//!   ↓  TxContext
//! DaoFactory                    (picks the backend)
//!   ↓  Arc<dyn WidgetDao> / Arc<dyn WordDao>
//! PgWidgetDao | MemoryWidgetDao
//!   ↓
//! PostgreSQL  | process memory
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs                     ← DatabasePool, migrations
//!   transaction.rs              ← TxContext, TransactionProvider, txn_with_dao
//!   dao/
//!     widget_dao.rs / word_dao.rs
//!     factory.rs                ← DaoFactory trait
//!     impl/
//!       postgres/               ← SQLx DAOs + SqlDaoFactory
//!       memory/                 ← in-memory DAOs + MemoryDaoFactory
//! ```

pub mod dao;
pub mod pool;
pub mod transaction;

pub use dao::*;
pub use pool::*;
pub use transaction::*;
