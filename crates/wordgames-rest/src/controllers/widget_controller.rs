//! Widget endpoints.

use crate::{
    extractors::{IdPath, JsonBody},
    responses::{ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tracing::debug;
use wordgames_core::{PrefixCounts, Widget, WidgetId, WordgamesError};

/// Body of `POST /widgets`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewWidgetRequest {
    pub name: String,
}

/// Query of `PUT /widgets/id/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct RenameWidgetQuery {
    pub name: Option<String>,
}

/// Creates the widget router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_widget))
        .route("/all", get(list_widgets))
        .route("/id/:id", get(get_widget).put(rename_widget))
        .route("/prefix-counts", get(widget_prefix_counts))
}

/// Get a widget by ID.
async fn get_widget(
    State(state): State<AppState>,
    IdPath(id): IdPath<WidgetId>,
) -> ApiResult<Widget> {
    debug!("Get widget request: {}", id);

    let widget = state.widgets(|dao| async move { dao.get(id).await }).await?;
    widget
        .map(axum::Json)
        .ok_or_else(|| AppError(WordgamesError::not_found("Widget", id)))
}

/// Rename a widget; the new name comes from the `name` query parameter.
async fn rename_widget(
    State(state): State<AppState>,
    IdPath(id): IdPath<WidgetId>,
    Query(query): Query<RenameWidgetQuery>,
) -> ApiResult<Widget> {
    let name = query.name.ok_or_else(|| {
        AppError(WordgamesError::validation("query parameter 'name' is required"))
    })?;
    debug!("Rename widget request: {} -> {:?}", id, name);

    let widget = state
        .widgets(move |dao| async move { dao.update(id, &name).await })
        .await?;
    ok(widget)
}

/// List every widget in id order.
async fn list_widgets(State(state): State<AppState>) -> ApiResult<Vec<Widget>> {
    let widgets = state.widgets(|dao| async move { dao.get_all().await }).await?;
    ok(widgets)
}

/// Create a widget.
async fn create_widget(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<NewWidgetRequest>,
) -> ApiResult<Widget> {
    debug!("Create widget request: {:?}", request.name);

    let widget = state
        .widgets(move |dao| async move { dao.create(&request.name).await })
        .await?;
    ok(widget)
}

/// Count widgets by the uppercased first letter of their name.
async fn widget_prefix_counts(State(state): State<AppState>) -> ApiResult<PrefixCounts> {
    let counts = state
        .widgets(|dao| async move { dao.prefix_counts().await })
        .await?;
    ok(counts)
}
