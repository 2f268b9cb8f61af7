//! End-to-end booking flow over the HTTP router.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use booking_server::core::{Config, ServerState};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;

async fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::with_overrides(dir.path().to_str().unwrap(), 0);
    let state = ServerState::initialize(&config).await.unwrap();
    (booking_server::api::router(state), dir)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(v) => builder.body(Body::from(v.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn booking_body(guests: i64, offset_hours: i64, duration_hours: i64) -> Value {
    let from = Utc::now() + Duration::hours(offset_hours);
    let to = from + Duration::hours(duration_hours);
    json!({
        "customer_name": "Anna",
        "phone": "+375291232233",
        "datetime_from": from,
        "datetime_to": to,
        "guests_count": guests,
    })
}

#[tokio::test]
async fn booking_is_created_with_smallest_fitting_table() {
    let (app, _dir) = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/tables",
        Some(json!({"name": "T2", "seats_count": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    send(
        &app,
        "POST",
        "/api/tables",
        Some(json!({"name": "T4", "seats_count": 4})),
    )
    .await;

    let (status, body) = send(&app, "POST", "/api/bookings", Some(booking_body(2, 1, 1))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["assigned_table"], "T2");

    // Fully overlapping second request falls back to the bigger table
    let (status, body) = send(&app, "POST", "/api/bookings", Some(booking_body(2, 1, 1))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["assigned_table"], "T4");
}

#[tokio::test]
async fn oversized_party_gets_a_tableless_pending_booking() {
    let (app, _dir) = test_app().await;
    send(
        &app,
        "POST",
        "/api/tables",
        Some(json!({"name": "T4", "seats_count": 4})),
    )
    .await;

    let (status, body) = send(&app, "POST", "/api/bookings", Some(booking_body(10, 1, 1))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["assigned_table"], Value::Null);
}

#[tokio::test]
async fn invalid_requests_are_rejected_with_reason() {
    let (app, _dir) = test_app().await;

    // Start in the past
    let (status, body) = send(&app, "POST", "/api/bookings", Some(booking_body(2, -1, 1))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("future"));

    // Window over the 6h ceiling
    let (status, body) = send(&app, "POST", "/api/bookings", Some(booking_body(2, 1, 7))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("too long"));
}

#[tokio::test]
async fn confirm_and_cancel_are_bulk_status_changes() {
    let (app, _dir) = test_app().await;
    send(
        &app,
        "POST",
        "/api/tables",
        Some(json!({"name": "T2", "seats_count": 2})),
    )
    .await;

    let (_, created) = send(&app, "POST", "/api/bookings", Some(booking_body(2, 1, 1))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/api/bookings/confirm",
        Some(json!({"ids": [id]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 1);

    let (_, booking) = send(&app, "GET", &format!("/api/bookings/{id}"), None).await;
    assert_eq!(booking["status"], "confirmed");

    let (_, body) = send(
        &app,
        "POST",
        "/api/bookings/cancel",
        Some(json!({"ids": [id]})),
    )
    .await;
    assert_eq!(body["updated"], 1);
}

#[tokio::test]
async fn cancelled_booking_frees_the_slot() {
    let (app, _dir) = test_app().await;
    send(
        &app,
        "POST",
        "/api/tables",
        Some(json!({"name": "T2", "seats_count": 2})),
    )
    .await;

    let (_, first) = send(&app, "POST", "/api/bookings", Some(booking_body(2, 1, 1))).await;
    assert_eq!(first["assigned_table"], "T2");
    let id = first["id"].as_i64().unwrap();

    send(
        &app,
        "POST",
        "/api/bookings/cancel",
        Some(json!({"ids": [id]})),
    )
    .await;

    // Same window again: the cancelled booking no longer blocks
    let (_, second) = send(&app, "POST", "/api/bookings", Some(booking_body(2, 1, 1))).await;
    assert_eq!(second["assigned_table"], "T2");
}

#[tokio::test]
async fn deleting_a_table_detaches_its_bookings() {
    let (app, _dir) = test_app().await;
    let (_, table) = send(
        &app,
        "POST",
        "/api/tables",
        Some(json!({"name": "T2", "seats_count": 2})),
    )
    .await;
    let table_id = table["id"].as_i64().unwrap();

    let (_, created) = send(&app, "POST", "/api/bookings", Some(booking_body(2, 1, 1))).await;
    let booking_id = created["id"].as_i64().unwrap();

    let (status, _) = send(&app, "DELETE", &format!("/api/tables/{table_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    // Booking survives, table reference is gone
    let (status, booking) = send(&app, "GET", &format!("/api/bookings/{booking_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(booking["table_id"], Value::Null);
}

#[tokio::test]
async fn menu_crud_roundtrip() {
    let (app, _dir) = test_app().await;

    let (status, category) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name_i18n": {"ru": "Завтраки", "en": "Breakfasts"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let category_id = category["id"].as_i64().unwrap();

    let (status, item) = send(
        &app,
        "POST",
        "/api/menu-items",
        Some(json!({
            "category_id": category_id,
            "name_i18n": {"en": "Omelette"},
            "price_cents": 650,
            "slug": "omelette",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["currency"], "RUB");

    // Duplicate slug is a conflict
    let (status, _) = send(
        &app,
        "POST",
        "/api/menu-items",
        Some(json!({
            "category_id": category_id,
            "name_i18n": {"en": "Other"},
            "price_cents": 500,
            "slug": "omelette",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, items) = send(&app, "GET", "/api/menu-items", None).await;
    assert_eq!(items.as_array().unwrap().len(), 1);
}
