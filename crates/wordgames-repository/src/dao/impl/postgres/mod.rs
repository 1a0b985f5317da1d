//! PostgreSQL DAOs built on SQLx.
//!
//! Each DAO holds a [`TxContext`](crate::TxContext) and locks it for the
//! duration of one statement.

mod factory;
mod widget_dao_impl;
mod word_dao_impl;

pub use factory::SqlDaoFactory;
pub use widget_dao_impl::PgWidgetDao;
pub use word_dao_impl::PgWordDao;

use wordgames_core::{prefix_of, PrefixCounts};

/// Folds `(first character, count)` rows into a report.
///
/// The database only groups by the raw first character; uppercasing happens
/// here through [`prefix_of`] so the result does not depend on the server's
/// locale. Rows whose characters map to the same prefix (`k` and `K`) are
/// merged, and the empty string PostgreSQL yields for empty text is dropped.
fn prefix_counts_from_rows(rows: Vec<(String, i64)>) -> PrefixCounts {
    rows.into_iter()
        .filter_map(|(first, count)| prefix_of(&first).map(|prefix| (prefix, count.unsigned_abs())))
        .collect()
}
