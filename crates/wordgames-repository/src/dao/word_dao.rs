//! WordDao trait.

use async_trait::async_trait;
use wordgames_core::{PrefixCounts, Word, WordId, WordgamesResult};

/// Word data access object, the twin of [`WidgetDao`](crate::WidgetDao)
/// over the `words` table.
#[async_trait]
pub trait WordDao: Send + Sync {
    async fn get(&self, id: WordId) -> WordgamesResult<Option<Word>>;

    /// Every word, ascending by id.
    async fn get_all(&self) -> WordgamesResult<Vec<Word>>;

    async fn create(&self, word: &str) -> WordgamesResult<Word>;

    /// Replaces a word's text. `NotFound` when `id` does not exist.
    async fn update(&self, id: WordId, word: &str) -> WordgamesResult<Word>;

    async fn prefix_counts(&self) -> WordgamesResult<PrefixCounts>;
}
