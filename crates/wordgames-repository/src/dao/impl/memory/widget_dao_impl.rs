//! In-memory widget DAO.

use super::table::MemoryTable;
use crate::dao::WidgetDao;
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use wordgames_core::{PrefixCounts, Widget, WidgetId, WordgamesError, WordgamesResult};

/// Widgets kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryWidgetDao {
    widgets: MemoryTable<Widget>,
}

impl MemoryWidgetDao {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WidgetDao for MemoryWidgetDao {
    async fn get(&self, id: WidgetId) -> WordgamesResult<Option<Widget>> {
        debug!("Loading widget {}", id);
        Ok(self.widgets.get(id.into_inner()))
    }

    async fn get_all(&self) -> WordgamesResult<Vec<Widget>> {
        Ok(self.widgets.all())
    }

    async fn create(&self, name: &str) -> WordgamesResult<Widget> {
        debug!("Creating widget {:?}", name);
        self.widgets.insert_with(|id| Widget {
            id: WidgetId::new(id),
            name: name.to_string(),
            created_at: Utc::now(),
        })
    }

    async fn update(&self, id: WidgetId, name: &str) -> WordgamesResult<Widget> {
        debug!("Renaming widget {} to {:?}", id, name);
        self.widgets
            .update_with(id.into_inner(), |widget| widget.with_name(name))
            .ok_or_else(|| WordgamesError::not_found("Widget", id))
    }

    async fn prefix_counts(&self) -> WordgamesResult<PrefixCounts> {
        Ok(self
            .widgets
            .scan(|widgets| PrefixCounts::tally(widgets.map(|w| w.name.as_str()))))
    }
}
