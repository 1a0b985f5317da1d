//! Id-keyed row storage shared by the in-memory DAOs.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use wordgames_core::{WordgamesError, WordgamesResult};

/// Rows keyed by a backend-assigned id starting at 1.
///
/// Id allocation and insertion happen under one write lock, so concurrent
/// inserts get distinct, contiguous ids.
#[derive(Debug)]
pub(crate) struct MemoryTable<T> {
    state: RwLock<TableState<T>>,
}

#[derive(Debug)]
struct TableState<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl<T> MemoryTable<T> {
    fn starting_at(next_id: i32) -> Self {
        Self {
            state: RwLock::new(TableState {
                rows: BTreeMap::new(),
                next_id,
            }),
        }
    }
}

impl<T: Clone> MemoryTable<T> {
    pub(crate) fn get(&self, id: i32) -> Option<T> {
        self.state.read().rows.get(&id).cloned()
    }

    /// All rows in ascending id order.
    pub(crate) fn all(&self) -> Vec<T> {
        self.state.read().rows.values().cloned().collect()
    }

    /// Allocates the next id and stores the row `build` makes for it.
    ///
    /// Fails without storing anything once the id space is used up.
    pub(crate) fn insert_with(&self, build: impl FnOnce(i32) -> T) -> WordgamesResult<T> {
        let mut state = self.state.write();
        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or_else(|| WordgamesError::Database(format!("id sequence exhausted at {id}")))?;
        let row = build(id);
        state.rows.insert(id, row.clone());
        Ok(row)
    }

    /// Replaces the row at `id` with `change(old)`. `None` if absent.
    pub(crate) fn update_with(&self, id: i32, change: impl FnOnce(&T) -> T) -> Option<T> {
        let mut state = self.state.write();
        let row = state.rows.get_mut(&id)?;
        *row = change(row);
        Some(row.clone())
    }

    /// Runs `f` over every row while holding the read lock.
    pub(crate) fn scan<R>(&self, f: impl FnOnce(&mut dyn Iterator<Item = &T>) -> R) -> R {
        let state = self.state.read();
        f(&mut state.rows.values())
    }
}
