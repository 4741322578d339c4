//! Shared integration test helpers
//!
//! The backend service is a `wiremock` server; requests go through the
//! fully layered router with `oneshot`.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tabletop_server::{AppState, Config, build_app};
use tower::ServiceExt;
use wiremock::MockServer;

pub const ANON_KEY: &str = "test-anon-key";
pub const RESTAURANT_ID: &str = "059ffaf3-1409-4da1-b1c5-187dda0e27a5";

/// App wired to the given backend base URL
pub fn app_for(base_url: &str) -> Router {
    let state = AppState::new(&Config::new(base_url, ANON_KEY)).unwrap();
    build_app(state)
}

/// Mock backend plus an app pointed at it
pub async fn setup() -> (MockServer, Router) {
    let server = MockServer::start().await;
    let app = app_for(&server.uri());
    (server, app)
}

/// App pointed at a port nothing listens on
pub fn unreachable_app() -> Router {
    app_for("http://127.0.0.1:1")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Value,
}

/// Send one request; `body` is sent verbatim as JSON text
pub async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(text) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(text.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, "GET", uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> TestResponse {
    send(app, "DELETE", uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> TestResponse {
    send(app, "POST", uri, Some(&body.to_string())).await
}

pub async fn patch_json(app: Router, uri: &str, body: &Value) -> TestResponse {
    send(app, "PATCH", uri, Some(&body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: &Value) -> TestResponse {
    send(app, "PUT", uri, Some(&body.to_string())).await
}
