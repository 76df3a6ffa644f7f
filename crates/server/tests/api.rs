//! End-to-end tests for the HTTP API over in-memory stores.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use homeflame_server::config::ServerConfig;
use homeflame_server::db::Stores;
use homeflame_server::middleware::REQUEST_ID_HEADER;
use homeflame_server::{AppState, app};

fn test_app() -> Router {
    let config = ServerConfig::from_vars(|key| match key {
        "HOMEFLAME_STORE" => Some("memory".to_string()),
        _ => None,
    })
    .unwrap();
    app(AppState::new(config, Stores::in_memory()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn register(app: &Router, name: &str, email: &str, role: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/auth/register",
        &json!({"name": name, "email": email, "password": "secret", "role": role}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 200, "{body}");
    body["data"]["id"].as_i64().unwrap()
}

async fn subscribe(app: &Router, user_id: i64, chef_id: i64, plan: &str) -> (StatusCode, Value) {
    post(
        app,
        "/api/subscriptions",
        &json!({"userId": user_id, "chefId": chef_id, "planType": plan}),
    )
    .await
}

#[tokio::test]
async fn health_echoes_request_id() {
    let app = test_app();
    let request = Request::get("/health")
        .header(REQUEST_ID_HEADER, "abc-123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
}

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let app = test_app();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok(), "{id}");
}

#[tokio::test]
async fn cors_preflight_allows_request_id() {
    let app = test_app();
    let request = Request::options("/api/contact")
        .header(header::ORIGIN, "https://homeflame.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-request-id")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let allowed = response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap();
    assert!(allowed.contains(REQUEST_ID_HEADER), "{allowed}");
    assert!(!allowed.contains("authorization"), "{allowed}");
}

#[tokio::test]
async fn readiness_with_memory_stores() {
    let app = test_app();
    let response = app
        .oneshot(Request::get("/health/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn register_returns_user_with_hashed_password() {
    let app = test_app();
    let (status, body) = post(
        &app,
        "/api/auth/register",
        &json!({"name": "Ada", "email": "ada@example.com", "password": "secret"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Registration successful");
    assert_eq!(body["data"]["email"], "ada@example.com");
    assert_eq!(body["data"]["role"], "USER");
    let stored = body["data"]["password"].as_str().unwrap();
    assert_ne!(stored, "secret");
    assert!(stored.starts_with("$argon2"));
}

#[tokio::test]
async fn duplicate_registration_is_rejected_in_envelope() {
    let app = test_app();
    register(&app, "Ada", "ada@example.com", "USER").await;

    let (status, body) = post(
        &app,
        "/api/auth/register",
        &json!({"name": "Other", "email": "ada@example.com", "password": "x"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["message"], "Email already exists");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = test_app();
    register(&app, "Ada", "ada@example.com", "USER").await;

    let (_, wrong_password) = post(
        &app,
        "/api/auth/login",
        &json!({"email": "ada@example.com", "password": "nope"}),
    )
    .await;
    let (_, unknown_email) = post(
        &app,
        "/api/auth/login",
        &json!({"email": "ghost@example.com", "password": "secret"}),
    )
    .await;

    for body in [&wrong_password, &unknown_email] {
        assert_eq!(body["success"], false);
        assert_eq!(body["statusCode"], 401);
        assert_eq!(body["message"], "Invalid credentials");
    }

    let (_, ok) = post(
        &app,
        "/api/auth/login",
        &json!({"email": "ada@example.com", "password": "secret"}),
    )
    .await;
    assert_eq!(ok["message"], "Login successful");
    assert_eq!(ok["data"]["name"], "Ada");
}

#[tokio::test]
async fn malformed_input_is_a_transport_400() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/api/auth/register",
        &json!({"name": "Ada", "email": "not-an-email", "password": "x"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);

    let (status, body) = post(&app, "/api/auth/login", &json!({"email": 5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = get(&app, "/api/subscriptions/user/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);
}

#[tokio::test]
async fn contact_messages_are_listed_in_order() {
    let app = test_app();
    for (name, text) in [("Ada", "First"), ("Grace", "Second")] {
        let (_, body) = post(
            &app,
            "/api/contact",
            &json!({"name": name, "email": "guest@example.com", "message": text}),
        )
        .await;
        assert_eq!(body["message"], "Message sent successfully");
    }

    let (status, body) = get(&app, "/api/contact/admin/messages").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Messages retrieved successfully");
    let messages = body["data"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["message"], "First");
    assert_eq!(messages[1]["name"], "Grace");
}

#[tokio::test]
async fn subscription_requires_existing_user_and_chef() {
    let app = test_app();
    let user = register(&app, "Ada", "ada@example.com", "USER").await;

    let (status, body) = subscribe(&app, user, 999, "WEEKLY").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["message"], "User or Chef not found");
}

#[tokio::test]
async fn subscriptions_and_analytics() {
    let app = test_app();
    let user = register(&app, "Ada", "ada@example.com", "USER").await;
    let other = register(&app, "Alan", "alan@example.com", "USER").await;
    let chef = register(&app, "Julia", "julia@example.com", "CHEF").await;

    let (_, body) = subscribe(&app, user, chef, "WEEKLY").await;
    assert_eq!(body["message"], "Subscription created successfully");
    assert_eq!(body["data"]["active"], true);
    assert_eq!(body["data"]["chefName"], "Julia");
    assert_eq!(body["data"]["planType"], "WEEKLY");
    subscribe(&app, other, chef, "MONTHLY").await;

    let (_, by_user) = get(&app, &format!("/api/subscriptions/user/{user}")).await;
    assert_eq!(by_user["data"].as_array().unwrap().len(), 1);

    let (_, by_chef) = get(&app, &format!("/api/subscriptions/chef/{chef}")).await;
    assert_eq!(by_chef["message"], "Subscriptions retrieved successfully");
    assert_eq!(by_chef["data"].as_array().unwrap().len(), 2);

    let (_, analytics) = get(&app, &format!("/api/chef/analytics/{chef}")).await;
    assert_eq!(analytics["message"], "Chef analytics retrieved successfully");
    assert_eq!(analytics["data"]["chefId"], chef);
    assert_eq!(analytics["data"]["totalSubscriptions"], 2);
    assert_eq!(analytics["data"]["activeSubscriptions"], 2);

    let (_, summary) = get(&app, "/api/admin/reports/summary").await;
    assert_eq!(summary["message"], "Admin report summary retrieved successfully");
    assert_eq!(summary["data"]["totalSubscriptions"], 2);
    assert_eq!(summary["data"]["totalRevenue"], 200);
}

#[tokio::test]
async fn unknown_chef_has_zero_analytics() {
    let app = test_app();
    let (_, body) = get(&app, "/api/chef/analytics/42").await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["totalSubscriptions"], 0);
    assert_eq!(body["data"]["activeSubscriptions"], 0);
}

#[tokio::test]
async fn chef_directory_lists_chefs_without_password() {
    let app = test_app();
    register(&app, "Ada", "ada@example.com", "USER").await;
    let chef = register(&app, "Julia", "julia@example.com", "CHEF").await;

    let (status, body) = get(&app, "/api/chefs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Chefs retrieved successfully");
    let chefs = body["data"].as_array().unwrap();
    assert_eq!(chefs.len(), 1);
    assert_eq!(chefs[0]["id"], chef);
    assert_eq!(chefs[0]["name"], "Julia");
    assert!(chefs[0].get("password").is_none());

    let (_, one) = get(&app, &format!("/api/chefs/{chef}")).await;
    assert_eq!(one["message"], "Chef retrieved successfully");
    assert_eq!(one["data"]["email"], "julia@example.com");
}

#[tokio::test]
async fn unknown_or_non_chef_id_is_not_found() {
    let app = test_app();
    let user = register(&app, "Ada", "ada@example.com", "USER").await;

    for uri in [format!("/api/chefs/{user}"), "/api/chefs/999".to_string()] {
        let (status, body) = get(&app, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["message"], "Chef not found");
    }
}
