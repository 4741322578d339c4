//! /restaurants/{id}/reservations against a mocked REST API

mod common;

use common::{RESTAURANT_ID, delete, get, patch_json, post_json, setup, unreachable_app};
use http::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

const RESERVATION_ID: &str = "b3f1a2c4-0d5e-4f67-8a9b-0c1d2e3f4a5b";

fn reservation_row() -> Value {
    json!({
        "id": RESERVATION_ID,
        "restaurant_id": RESTAURANT_ID,
        "user_id": null,
        "date": "2025-03-14",
        "time": "19:30",
        "guests": 4,
        "status": "confirmed"
    })
}

fn reservations_uri() -> String {
    format!("/restaurants/{RESTAURANT_ID}/reservations")
}

fn reservation_uri() -> String {
    format!("/restaurants/{RESTAURANT_ID}/reservations/{RESERVATION_ID}")
}

#[tokio::test]
async fn list_without_date() {
    let (server, app) = setup().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/reservations"))
        .and(query_param("restaurant_id", format!("eq.{RESTAURANT_ID}").as_str()))
        .and(query_param_is_missing("date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([reservation_row()])))
        .expect(1)
        .mount(&server)
        .await;

    let res = get(app, &reservations_uri()).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!([reservation_row()]));
}

#[tokio::test]
async fn list_for_date() {
    let (server, app) = setup().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/reservations"))
        .and(query_param("restaurant_id", format!("eq.{RESTAURANT_ID}").as_str()))
        .and(query_param("date", "eq.2025-03-14"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let res = get(app, &format!("{}?date=2025-03-14", reservations_uri())).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!([]));
}

#[tokio::test]
async fn list_backend_unreachable() {
    let res = get(unreachable_app(), &reservations_uri()).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body, json!({ "error": "Failed to fetch reservations" }));
}

#[tokio::test]
async fn get_by_id_filters_on_both_ids() {
    let (server, app) = setup().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/reservations"))
        .and(query_param("restaurant_id", format!("eq.{RESTAURANT_ID}").as_str()))
        .and(query_param("id", format!("eq.{RESERVATION_ID}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([reservation_row()])))
        .expect(1)
        .mount(&server)
        .await;

    let res = get(app, &reservation_uri()).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!([reservation_row()]));
}

#[tokio::test]
async fn create_success() {
    let (server, app) = setup().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/reservations"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!({
            "restaurant_id": RESTAURANT_ID,
            "date": "2025-03-14",
            "time": "19:30",
            "guests": 4
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([reservation_row()])))
        .expect(1)
        .mount(&server)
        .await;

    let body = json!({ "date": "2025-03-14", "time": "19:30", "numberOfGuests": 4 });
    let res = post_json(app, &reservations_uri(), &body).await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(
        res.body,
        json!({
            "message": "Reservation created successfully",
            "data": [reservation_row()]
        })
    );
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let (_server, app) = setup().await;
    let res = post_json(
        app.clone(),
        &reservations_uri(),
        &json!({ "date": "2025-03-14", "guests": 4 }),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = post_json(
        app,
        &reservations_uri(),
        &json!({ "date": "2025-03-14", "time": "19:30", "guests": 0 }),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, json!({ "error": "Invalid input: guests is required" }));
}

#[tokio::test]
async fn create_relays_upstream_status() {
    let (server, app) = setup().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/reservations"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let body = json!({ "date": "2025-03-14", "time": "19:30", "guests": 2 });
    let res = post_json(app, &reservations_uri(), &body).await;
    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(res.body, json!({ "error": "Failed to create reservation" }));
}

#[tokio::test]
async fn update_sends_only_supplied_fields() {
    let (server, app) = setup().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/reservations"))
        .and(query_param("id", format!("eq.{RESERVATION_ID}").as_str()))
        .and(body_json(json!({ "status": "cancelled" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let res = patch_json(app, &reservation_uri(), &json!({ "status": "cancelled" })).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "message": "Reservation updated successfully" }));
}

#[tokio::test]
async fn update_relays_rows_with_null_columns() {
    let (server, app) = setup().await;
    let row = json!({
        "id": 42,
        "restaurant_id": RESTAURANT_ID,
        "user_id": null,
        "date": "2025-03-14",
        "time": null,
        "guests": null,
        "status": "cancelled",
        "created_at": "2025-03-01T09:00:00Z"
    });
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/reservations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([row.clone()])))
        .expect(1)
        .mount(&server)
        .await;

    let res = patch_json(app, &reservation_uri(), &json!({ "status": "cancelled" })).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({ "message": "Reservation updated successfully", "data": [row] })
    );
}

#[tokio::test]
async fn list_ignores_empty_date() {
    let (server, app) = setup().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/reservations"))
        .and(query_param("restaurant_id", format!("eq.{RESTAURANT_ID}").as_str()))
        .and(query_param_is_missing("date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([reservation_row()])))
        .expect(1)
        .mount(&server)
        .await;

    let res = get(app, &format!("{}?date=", reservations_uri())).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!([reservation_row()]));
}

#[tokio::test]
async fn delete_success() {
    let (server, app) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/reservations"))
        .and(query_param("restaurant_id", format!("eq.{RESTAURANT_ID}").as_str()))
        .and(query_param("id", format!("eq.{RESERVATION_ID}").as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let res = delete(app, &reservation_uri()).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "message": "Reservation deleted successfully" }));
}
