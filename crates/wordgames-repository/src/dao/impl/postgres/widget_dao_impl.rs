//! PostgreSQL widget DAO.

use super::prefix_counts_from_rows;
use crate::dao::WidgetDao;
use crate::transaction::TxContext;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::debug;
use wordgames_core::{PrefixCounts, Widget, WidgetId, WordgamesError, WordgamesResult};

/// Widget DAO over the `widgets` table.
#[derive(Debug, Clone)]
pub struct PgWidgetDao {
    txn: TxContext,
}

impl PgWidgetDao {
    /// Creates a DAO issuing statements through `txn`.
    #[must_use]
    pub fn new(txn: TxContext) -> Self {
        Self { txn }
    }
}

/// Database row representation of a widget.
#[derive(Debug, FromRow)]
struct WidgetRow {
    id: i32,
    name: String,
    created_at: DateTime<Utc>,
}

impl From<WidgetRow> for Widget {
    fn from(row: WidgetRow) -> Self {
        Self {
            id: WidgetId::new(row.id),
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl WidgetDao for PgWidgetDao {
    async fn get(&self, id: WidgetId) -> WordgamesResult<Option<Widget>> {
        debug!("Loading widget {}", id);
        let mut tx = self.txn.lock().await?;

        let row = sqlx::query_as::<_, WidgetRow>(
            "SELECT id, name, created_at FROM widgets WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut **tx)
        .await?;

        Ok(row.map(Widget::from))
    }

    async fn get_all(&self) -> WordgamesResult<Vec<Widget>> {
        debug!("Loading all widgets");
        let mut tx = self.txn.lock().await?;

        let rows = sqlx::query_as::<_, WidgetRow>(
            "SELECT id, name, created_at FROM widgets ORDER BY id ASC",
        )
        .fetch_all(&mut **tx)
        .await?;

        Ok(rows.into_iter().map(Widget::from).collect())
    }

    async fn create(&self, name: &str) -> WordgamesResult<Widget> {
        debug!("Creating widget {:?}", name);
        let mut tx = self.txn.lock().await?;

        let row = sqlx::query_as::<_, WidgetRow>(
            "INSERT INTO widgets (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(&mut **tx)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: WidgetId, name: &str) -> WordgamesResult<Widget> {
        debug!("Renaming widget {} to {:?}", id, name);
        let mut tx = self.txn.lock().await?;

        let row = sqlx::query_as::<_, WidgetRow>(
            "UPDATE widgets SET name = $1 WHERE id = $2 RETURNING id, name, created_at",
        )
        .bind(name)
        .bind(id.into_inner())
        .fetch_optional(&mut **tx)
        .await?;

        row.map(Widget::from)
            .ok_or_else(|| WordgamesError::not_found("Widget", id))
    }

    async fn prefix_counts(&self) -> WordgamesResult<PrefixCounts> {
        let mut tx = self.txn.lock().await?;

        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT left(name, 1), COUNT(*) FROM widgets GROUP BY 1",
        )
        .fetch_all(&mut **tx)
        .await?;

        Ok(prefix_counts_from_rows(rows))
    }
}
