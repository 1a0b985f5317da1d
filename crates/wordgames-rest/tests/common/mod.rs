//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use shaku::module;
use tower::ServiceExt;
use wordgames_config::ServerConfig;
use wordgames_repository::{DetachedTransactionProvider, MemoryDaoFactory};
use wordgames_rest::{create_router, create_router_from_module, AppState};

module! {
    pub TestModule {
        components = [DetachedTransactionProvider, MemoryDaoFactory],
        providers = []
    }
}

/// A router over fresh in-memory tables.
pub fn memory_app() -> Router {
    let module = TestModule::builder().build();
    create_router_from_module(&module, &ServerConfig::default())
}

/// A router over caller-supplied components.
pub fn app_with_state(state: AppState) -> Router {
    create_router(state, &ServerConfig::default())
}

/// Sends one request and returns the status and the body parsed as JSON
/// (`Value::Null` for an empty body).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, None).await
}
