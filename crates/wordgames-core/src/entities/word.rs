//! Word entity.

use crate::WordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A word as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: WordId,
    /// Serialized as `name`, the same key widgets use.
    #[serde(rename = "name")]
    pub word: String,
    pub created_at: DateTime<Utc>,
}

impl Word {
    /// Returns a copy of this word with different text.
    #[must_use]
    pub fn with_word(&self, word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..self.clone()
        }
    }
}
