//! /register and /login against a mocked auth API

mod common;

use common::{ANON_KEY, post_json, send, setup, unreachable_app};
use http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn credentials() -> serde_json::Value {
    json!({ "email": "test@example.com", "password": "password123" })
}

#[tokio::test]
async fn register_success() {
    let (server, app) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(header("apikey", ANON_KEY))
        .and(header("authorization", format!("Bearer {ANON_KEY}").as_str()))
        .and(body_json(credentials()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "11111111-2222-3333-4444-555555555555",
            "email": "test@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let res = post_json(app, "/register", &credentials()).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "message": "User registered successfully" }));
}

#[tokio::test]
async fn register_rejected_relays_message_as_400() {
    let (server, app) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "code": 422, "msg": "User already registered" })),
        )
        .mount(&server)
        .await;

    let res = post_json(app, "/register", &credentials()).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, json!({ "error": "User already registered" }));
}

#[tokio::test]
async fn register_malformed_body() {
    let (_server, app) = setup().await;
    let res = send(app, "POST", "/register", Some("{\"email\": ")).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, json!({ "error": "Invalid request" }));
}

#[tokio::test]
async fn register_backend_unreachable() {
    let res = post_json(unreachable_app(), "/register", &credentials()).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body, json!({ "error": "Failed to register user" }));
}

#[tokio::test]
async fn login_success_relays_session() {
    let (server, app) = setup().await;
    let session = json!({
        "access_token": "eyJhbGciOiJIUzI1NiJ9.test",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1767225600,
        "refresh_token": "refresh-123",
        "user": { "id": "11111111-2222-3333-4444-555555555555", "email": "test@example.com" }
    });
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", ANON_KEY))
        .and(body_json(credentials()))
        .respond_with(ResponseTemplate::new(200).set_body_json(session.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let res = post_json(app, "/login", &credentials()).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({ "message": "Login successful", "session": session })
    );
}

#[tokio::test]
async fn login_rejected_is_401() {
    let (server, app) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let res = post_json(app, "/login", &credentials()).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body, json!({ "error": "Invalid login credentials" }));
}

#[tokio::test]
async fn login_malformed_body() {
    let (_server, app) = setup().await;
    let res = send(app, "POST", "/login", Some("not json")).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, json!({ "error": "Invalid request" }));
}

#[tokio::test]
async fn login_backend_unreachable() {
    let res = post_json(unreachable_app(), "/login", &credentials()).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body, json!({ "error": "Failed to log in" }));
}

#[tokio::test]
async fn login_undecodable_session() {
    let (server, app) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let res = post_json(app, "/login", &credentials()).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body, json!({ "error": "Failed to parse response" }));
}
