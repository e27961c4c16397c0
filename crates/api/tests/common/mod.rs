#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use mta_api::config::ServerConfig;
use mta_api::router::build_app_router;
use mta_api::state::AppState;
use mta_core::inventory::{self, Inventory};
use mta_core::threshold::{ConfigSource, StaticConfig};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Build the full application router over the seed inventory, resolving the
/// threshold from `source` instead of the process environment.
pub fn build_test_app(source: StaticConfig) -> Router {
    let inventory = inventory::load().expect("seed inventory loads");
    build_test_app_with(inventory, test_config(), source)
}

/// Build the router over an explicit inventory, config and threshold source.
pub fn build_test_app_with<C>(inventory: Inventory, config: ServerConfig, source: C) -> Router
where
    C: ConfigSource + Send + Sync + 'static,
{
    build_app_router(AppState::new(inventory, config, Arc::new(source)))
}

/// Send a request with the given method and an empty body.
pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
