//! Typed id path segment.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::str::FromStr;
use wordgames_core::WordgamesError;

/// Extracts the single path parameter and parses it as an id.
///
/// A segment that does not parse (e.g. `/widgets/id/abc`) is a 400.
///
/// ```ignore
/// async fn get_widget(IdPath(id): IdPath<WidgetId>) { /* ... */ }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: FromStr + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError(WordgamesError::validation(rejection.body_text())))?;

        raw.parse().map(IdPath).map_err(|_| {
            AppError(WordgamesError::validation(format!(
                "'{raw}' is not a valid id"
            )))
        })
    }
}
