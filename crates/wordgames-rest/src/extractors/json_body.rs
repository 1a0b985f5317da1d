//! JSON body extractor with JSON error responses.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use wordgames_core::WordgamesError;

/// Like [`Json`], but a body that is missing or does not deserialize becomes
/// a 400 with an [`ErrorResponse`](wordgames_core::ErrorResponse) body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            AppError(WordgamesError::validation(format!(
                "Invalid JSON: {}",
                rejection.body_text()
            )))
        })?;
        Ok(Self(value))
    }
}
