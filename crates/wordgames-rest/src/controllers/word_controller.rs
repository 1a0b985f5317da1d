//! Word endpoints. Same shape as the widget endpoints; the text field is
//! called `word` in requests.

use crate::{
    extractors::{IdPath, JsonBody},
    responses::{ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;
use wordgames_core::{PrefixCounts, Word, WordId, WordgamesError};

/// Body of `POST /words`; `name` is accepted for `word`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewWordRequest {
    #[serde(alias = "name")]
    pub word: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWordQuery {
    pub word: Option<String>,
}

/// Creates the word router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_word))
        .route("/all", get(list_words))
        .route("/id/:id", get(get_word).put(update_word))
        .route("/prefix-counts", get(word_prefix_counts))
}

async fn get_word(State(state): State<AppState>, IdPath(id): IdPath<WordId>) -> ApiResult<Word> {
    debug!("Get word request: {}", id);

    match state.words(|dao| async move { dao.get(id).await }).await? {
        Some(word) => Ok(Json(word)),
        None => Err(WordgamesError::not_found("Word", id).into()),
    }
}

async fn update_word(
    State(state): State<AppState>,
    IdPath(id): IdPath<WordId>,
    Query(query): Query<UpdateWordQuery>,
) -> ApiResult<Word> {
    let Some(text) = query.word else {
        return Err(AppError(WordgamesError::validation(
            "query parameter 'word' is required",
        )));
    };

    let word = state
        .words(move |dao| async move { dao.update(id, &text).await })
        .await?;
    ok(word)
}

async fn list_words(State(state): State<AppState>) -> ApiResult<Vec<Word>> {
    ok(state.words(|dao| async move { dao.get_all().await }).await?)
}

async fn create_word(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<NewWordRequest>,
) -> ApiResult<Word> {
    debug!("Create word request: {:?}", request.word);

    let word = state
        .words(move |dao| async move { dao.create(&request.word).await })
        .await?;
    ok(word)
}

async fn word_prefix_counts(State(state): State<AppState>) -> ApiResult<PrefixCounts> {
    ok(state.words(|dao| async move { dao.prefix_counts().await }).await?)
}
