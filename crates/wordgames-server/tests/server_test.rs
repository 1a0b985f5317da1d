//! End-to-end checks of the server wiring over the in-memory module.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wordgames_config::ServerConfig;
use wordgames_rest::create_router_from_module;
use wordgames_server::di::build_memory_module;

async fn call(router: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_memory_module_serves_widgets_and_words() {
    let module = build_memory_module();
    let router = create_router_from_module(module.as_ref(), &ServerConfig::default());

    let (status, widget) = call(&router, "POST", "/widgets", Some(json!({ "name": "cog" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(widget["id"], 1);

    let (status, word) = call(&router, "POST", "/words", Some(json!({ "word": "cat" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(word["id"], 1);

    let (status, counts) = call(&router, "GET", "/widgets/prefix-counts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(counts, json!({ "C": 1 }));
}

#[tokio::test]
async fn test_each_memory_module_starts_empty() {
    let first = build_memory_module();
    let router = create_router_from_module(first.as_ref(), &ServerConfig::default());
    call(&router, "POST", "/widgets", Some(json!({ "name": "cog" }))).await;

    let second = build_memory_module();
    let router = create_router_from_module(second.as_ref(), &ServerConfig::default());
    let (status, all) = call(&router, "GET", "/widgets/all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_readiness_under_memory_module() {
    let module = build_memory_module();
    let router = create_router_from_module(module.as_ref(), &ServerConfig::default());

    let (status, _) = call(&router, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
}
