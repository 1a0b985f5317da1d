//! In-memory word DAO.

use super::table::MemoryTable;
use crate::dao::WordDao;
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use wordgames_core::{PrefixCounts, Word, WordId, WordgamesError, WordgamesResult};

/// Words kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryWordDao {
    words: MemoryTable<Word>,
}

impl MemoryWordDao {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WordDao for MemoryWordDao {
    async fn get(&self, id: WordId) -> WordgamesResult<Option<Word>> {
        debug!("Loading word {}", id);
        Ok(self.words.get(id.into_inner()))
    }

    async fn get_all(&self) -> WordgamesResult<Vec<Word>> {
        Ok(self.words.all())
    }

    async fn create(&self, word: &str) -> WordgamesResult<Word> {
        debug!("Creating word {:?}", word);
        self.words.insert_with(|id| Word {
            id: WordId::new(id),
            word: word.to_string(),
            created_at: Utc::now(),
        })
    }

    async fn update(&self, id: WordId, word: &str) -> WordgamesResult<Word> {
        self.words
            .update_with(id.into_inner(), |existing| existing.with_word(word))
            .ok_or_else(|| WordgamesError::not_found("Word", id))
    }

    async fn prefix_counts(&self) -> WordgamesResult<PrefixCounts> {
        Ok(self
            .words
            .scan(|words| PrefixCounts::tally(words.map(|w| w.word.as_str()))))
    }
}
