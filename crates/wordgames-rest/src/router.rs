//! Main application router.

use crate::{
    controllers::{health_controller, widget_controller, word_controller},
    middleware::logging_middleware,
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use shaku::HasComponent;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use wordgames_config::ServerConfig;
use wordgames_repository::{DaoFactory, TransactionProvider};

/// Creates the router from a Shaku module providing the transaction
/// provider and DAO factory.
pub fn create_router_from_module<M>(module: &M, server_config: &ServerConfig) -> Router
where
    M: HasComponent<dyn TransactionProvider> + HasComponent<dyn DaoFactory>,
{
    create_router(AppState::from_module(module), server_config)
}

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = if server_config.cors_enabled {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    let router = Router::new()
        .merge(health_controller::router())
        .nest("/widgets", widget_controller::router())
        .nest("/words", word_controller::router())
        .route("/", get(root))
        .with_state(state)
        // layers run bottom-up on the way in
        .layer(middleware::from_fn(logging_middleware))
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    info!("Router created with widget, word and health endpoints");
    router
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Wordgames API"
}
