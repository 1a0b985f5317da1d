//! PostgreSQL word DAO.

use super::prefix_counts_from_rows;
use crate::dao::WordDao;
use crate::transaction::TxContext;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::debug;
use wordgames_core::{PrefixCounts, Word, WordId, WordgamesError, WordgamesResult};

/// Word DAO over the `words` table.
#[derive(Debug, Clone)]
pub struct PgWordDao {
    txn: TxContext,
}

impl PgWordDao {
    #[must_use]
    pub fn new(txn: TxContext) -> Self {
        Self { txn }
    }
}

#[derive(Debug, FromRow)]
struct WordRow {
    id: i32,
    word: String,
    created_at: DateTime<Utc>,
}

impl From<WordRow> for Word {
    fn from(row: WordRow) -> Self {
        Self {
            id: WordId::new(row.id),
            word: row.word,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl WordDao for PgWordDao {
    async fn get(&self, id: WordId) -> WordgamesResult<Option<Word>> {
        debug!("Loading word {}", id);
        let mut tx = self.txn.lock().await?;

        let row = sqlx::query_as::<_, WordRow>("SELECT id, word, created_at FROM words WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(row.map(Word::from))
    }

    async fn get_all(&self) -> WordgamesResult<Vec<Word>> {
        let mut tx = self.txn.lock().await?;

        let rows = sqlx::query_as::<_, WordRow>("SELECT id, word, created_at FROM words ORDER BY id ASC")
            .fetch_all(&mut **tx)
            .await?;

        Ok(rows.into_iter().map(Word::from).collect())
    }

    async fn create(&self, word: &str) -> WordgamesResult<Word> {
        debug!("Creating word {:?}", word);
        let mut tx = self.txn.lock().await?;

        let row = sqlx::query_as::<_, WordRow>(
            "INSERT INTO words (word) VALUES ($1) RETURNING id, word, created_at",
        )
        .bind(word)
        .fetch_one(&mut **tx)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: WordId, word: &str) -> WordgamesResult<Word> {
        debug!("Updating word {} to {:?}", id, word);
        let mut tx = self.txn.lock().await?;

        sqlx::query_as::<_, WordRow>(
            "UPDATE words SET word = $1 WHERE id = $2 RETURNING id, word, created_at",
        )
        .bind(word)
        .bind(id.into_inner())
        .fetch_optional(&mut **tx)
        .await?
        .map(Word::from)
        .ok_or_else(|| WordgamesError::not_found("Word", id))
    }

    async fn prefix_counts(&self) -> WordgamesResult<PrefixCounts> {
        let mut tx = self.txn.lock().await?;

        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT left(word, 1), COUNT(*) FROM words GROUP BY 1",
        )
        .fetch_all(&mut **tx)
        .await?;

        Ok(prefix_counts_from_rows(rows))
    }
}
