//! Public endpoint tests
//!
//! Drives the router with oneshot requests against a temporary database.
//! Email dispatch runs through the no-op transport, the way a deployment
//! without a provider key runs.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mesa_api::{AppState, Config};
use tempfile::TempDir;
use tower::ServiceExt;

fn test_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        port: 0,
        database_path: dir.path().join("mesa.db"),
        admin_token: "secret-token".to_string(),
        restaurant_name: "Riba da Cheda".to_string(),
        operator_email: "bookings@ribadacheda.example".to_string(),
        from_email: "noreply@ribadacheda.example".to_string(),
        sendgrid_api_key: None,
        sendgrid_api_base: None,
    };
    let state = AppState::new(config).unwrap();
    (dir, mesa_api::router(state))
}

fn booking(name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": email,
        "phone": "+34 600 111 222",
        "date": "2031-09-05",
        "time": "13:30",
        "guests": 4,
    })
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_reservation_is_stored_as_pending() {
    let (_dir, app) = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/reservations",
            &booking("Iria Castro", "iria@example.com"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["status"], "pending");
    assert_eq!(created["name"], "Iria Castro");
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::get(format!("/reservations/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["id"], id.as_str());
}

#[tokio::test]
async fn test_create_rejects_invalid_requests() {
    let (_dir, app) = test_app();

    let mut too_many = booking("Iria Castro", "iria@example.com");
    too_many["guests"] = serde_json::json!(25);
    let response = app
        .clone()
        .oneshot(post_json("/reservations", &too_many))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("guest count"));

    let mut past = booking("Iria Castro", "iria@example.com");
    past["date"] = serde_json::json!("2020-01-01");
    let response = app
        .clone()
        .oneshot(post_json("/reservations", &past))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut off_slot = booking("Iria Castro", "iria@example.com");
    off_slot["time"] = serde_json::json!("17:00");
    let response = app
        .oneshot(post_json("/reservations", &off_slot))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lookup_requires_email() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(Request::get("/reservations").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_lookup_is_case_insensitive_and_newest_first() {
    let (_dir, app) = test_app();

    for name in ["First Booking", "Second Booking"] {
        let response = app
            .clone()
            .oneshot(post_json("/reservations", &booking(name, "iria@example.com")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(
            Request::get("/reservations?email=IRIA@EXAMPLE.COM")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(response).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "Second Booking");
    assert_eq!(list[1]["name"], "First Booking");
}

#[tokio::test]
async fn test_get_unknown_reservation_is_404() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(
            Request::get("/reservations/no-such-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
