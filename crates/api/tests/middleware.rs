//! Integration tests for the shared middleware stack and routing.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::get;
use mta_core::threshold::StaticConfig;
use tower::ServiceExt;

#[tokio::test]
async fn health_route_is_not_served() {
    let app = common::build_test_app(StaticConfig::new());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(StaticConfig::new().with("X", "1"));
    let response = get(app, "/mta-hosting-optimizer").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // MakeRequestUuid produces hyphenated UUIDs.
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_preflight_allows_get_from_configured_origin() {
    let app = common::build_test_app(StaticConfig::new());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/mta-hosting-optimizer")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
    let allow_methods = headers
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(allow_methods.contains("GET"), "got: {allow_methods}");
}
