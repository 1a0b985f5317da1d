//! WidgetDao trait: widget data access for one unit of work.

use async_trait::async_trait;
use wordgames_core::{PrefixCounts, Widget, WidgetId, WordgamesResult};

/// Widget data access object.
///
/// Every call runs inside the transaction the DAO was built for.
#[async_trait]
pub trait WidgetDao: Send + Sync {
    /// Looks up one widget. `Ok(None)` when no widget has `id`.
    async fn get(&self, id: WidgetId) -> WordgamesResult<Option<Widget>>;

    /// Lists every widget in ascending id order.
    async fn get_all(&self) -> WordgamesResult<Vec<Widget>>;

    /// Stores a new widget; the backend assigns id and creation time.
    async fn create(&self, name: &str) -> WordgamesResult<Widget>;

    /// Renames an existing widget.
    ///
    /// Returns [`WordgamesError::NotFound`](wordgames_core::WordgamesError::NotFound)
    /// when no widget has `id`.
    async fn update(&self, id: WidgetId, name: &str) -> WordgamesResult<Widget>;

    /// Counts widgets by uppercased first letter of their name.
    async fn prefix_counts(&self) -> WordgamesResult<PrefixCounts>;
}
