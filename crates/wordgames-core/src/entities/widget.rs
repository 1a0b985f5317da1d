//! Widget entity.

use crate::WidgetId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A widget as stored by the backend.
///
/// Simple enough to serialize directly; `name` and `createdAt` are the wire
/// names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// Backend-assigned id.
    pub id: WidgetId,
    /// The widget's name.
    pub name: String,
    /// Backend-assigned creation time.
    pub created_at: DateTime<Utc>,
}

impl Widget {
    /// Returns a copy of this widget carrying a different name.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}
