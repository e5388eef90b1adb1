//! End-to-end API tests
//!
//! Drives the real router and middleware stack over the in-memory user
//! directory: registration, login, the auth gate, profile operations and
//! response sanitization.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use userdock::auth::tokens::Claims;
use userdock::server::init::app_with_directory;
use userdock::users::InMemoryUserDirectory;
use userdock::ServerConfig;

const TEST_SECRET: &str = "test-secret";

fn test_app() -> Router {
    let config = ServerConfig {
        jwt_secret: TEST_SECRET.to_string(),
        bcrypt_cost: 4,
        ..Default::default()
    };
    app_with_directory(&config, Arc::new(InMemoryUserDirectory::new()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn json_request(method: Method, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn register(app: &Router, name: &str, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        json_request(
            Method::POST,
            "/api/auth/register",
            &json!({"name": name, "email": email, "password": password}),
            None,
        ),
    )
    .await
}

async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        json_request(
            Method::POST,
            "/api/auth/login",
            &json!({"email": email, "password": password}),
            None,
        ),
    )
    .await
}

/// No serialized user may ever carry credential material
fn assert_sanitized(user: &Value) {
    assert!(user.get("password").is_none());
    assert!(user.get("password_hash").is_none());
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("created_at").is_none());
    assert!(user.get("updated_at").is_none());
}

fn forge_token(secret: &str, sub: String, exp: u64) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let claims = Claims {
        sub,
        exp,
        iat: now.saturating_sub(3600),
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_ref()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_register_success() {
    let app = test_app();

    let (status, body) = register(&app, "A", "a@x.com", "secret1").await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["name"], "A");
    assert_eq!(body["user"]["verified"], false);
    assert_eq!(body["user"]["is_admin"], false);
    assert_sanitized(&body["user"]);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = test_app();

    register(&app, "A", "a@x.com", "secret1").await;
    let (status, body) = register(&app, "B", " A@X.com", "secret2").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Email already registered.");

    // First identity unaffected
    let (status, _) = login(&app, "a@x.com", "secret1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = test_app();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/register",
            &json!({"email": "a@x.com"}),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name, password are required fields.");
}

#[tokio::test]
async fn test_login_failures() {
    let app = test_app();
    register(&app, "A", "a@x.com", "secret1").await;

    let (status, _) = login(&app, "a@x.com", "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = login(&app, "unknown@x.com", "secret1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_requires_credentials() {
    let app = test_app();

    // No Authorization header
    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/api/users/profile")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["message"],
        "Authorization header missing or in the wrong format."
    );

    // Wrong scheme
    let (status, _) = send(
        &app,
        Request::builder()
            .uri("/api/users/profile")
            .header(header::AUTHORIZATION, "Token abc")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Garbage token
    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/api/users/profile")
            .header(header::AUTHORIZATION, "Bearer not.a.token")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token.");
}

#[tokio::test]
async fn test_profile_rejects_expired_token() {
    let app = test_app();
    let (_, body) = register(&app, "A", "a@x.com", "secret1").await;
    let user_id = body["user"]["id"].as_str().unwrap().to_string();

    let expired = forge_token(TEST_SECRET, user_id, 1);
    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/api/users/profile")
            .header(header::AUTHORIZATION, format!("Bearer {expired}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token has expired.");
}

#[tokio::test]
async fn test_profile_rejects_foreign_signature() {
    let app = test_app();
    let (_, body) = register(&app, "A", "a@x.com", "secret1").await;
    let user_id = body["user"]["id"].as_str().unwrap().to_string();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let forged = forge_token("another-secret", user_id, now + 3600);

    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/api/users/profile")
            .header(header::AUTHORIZATION, format!("Bearer {forged}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token.");
}

#[tokio::test]
async fn test_valid_token_unknown_subject() {
    let app = test_app();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let token = forge_token(TEST_SECRET, Uuid::new_v4().to_string(), now + 3600);

    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/api/users/profile")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found.");
}

#[tokio::test]
async fn test_full_account_flow() {
    let app = test_app();

    let (status, body) = register(&app, "A", "a@x.com", "secret1").await;
    assert_eq!(status, StatusCode::CREATED);
    let token = body["token"].as_str().unwrap().to_string();

    // Fetch profile
    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/api/users/profile")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "a@x.com");
    assert_sanitized(&body);

    // Partial update: name only, then email only
    let (status, body) = send(
        &app,
        json_request(
            Method::PATCH,
            "/api/users/update-profile",
            &json!({"name": "New Name"}),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "New Name");
    assert_eq!(body["email"], "a@x.com");
    assert_sanitized(&body);

    let (status, body) = send(
        &app,
        json_request(
            Method::PATCH,
            "/api/users/update-profile",
            &json!({"email": " B@X.com "}),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "New Name");
    assert_eq!(body["email"], "b@x.com");

    // Change password
    let (status, body) = send(
        &app,
        json_request(
            Method::PATCH,
            "/api/users/update-password",
            &json!({"oldPassword": "secret1", "newPassword": "secret2"}),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    // Old password no longer works, new one does; token stays valid
    let (status, _) = login(&app, "b@x.com", "secret1").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = login(&app, "b@x.com", "secret2").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Request::builder()
            .uri("/api/users/profile")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_password_wrong_old() {
    let app = test_app();
    let (_, body) = register(&app, "A", "a@x.com", "secret1").await;
    let token = body["token"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        json_request(
            Method::PATCH,
            "/api/users/update-password",
            &json!({"oldPassword": "wrong", "newPassword": "secret2"}),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Stored credential unchanged
    let (status, _) = login(&app, "a@x.com", "secret1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_profile_to_taken_email() {
    let app = test_app();
    register(&app, "A", "a@x.com", "secret1").await;
    let (_, body) = register(&app, "B", "b@x.com", "secret1").await;
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        json_request(
            Method::PATCH,
            "/api/users/update-profile",
            &json!({"email": "A@X.com"}),
            Some(&token),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already registered.");
}

#[tokio::test]
async fn test_update_picture() {
    let app = test_app();
    let (_, body) = register(&app, "A", "a@x.com", "secret1").await;
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        json_request(
            Method::PATCH,
            "/api/users/update-picture",
            &json!({"avatar": "avatars/abc123.jpg"}),
            Some(&token),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["avatar"], "avatars/abc123.jpg");
    assert_sanitized(&body);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/api/nope")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
    assert!(body["message"].as_str().unwrap().contains("/api/nope"));
}

#[tokio::test]
async fn test_rate_limit_trips() {
    let config = ServerConfig {
        jwt_secret: TEST_SECRET.to_string(),
        bcrypt_cost: 4,
        rate_limit: userdock::server::config::RateLimitConfig {
            max_requests: 2,
            window_secs: 60,
        },
        ..Default::default()
    };
    let app = app_with_directory(&config, Arc::new(InMemoryUserDirectory::new()));

    let (first, _) = login(&app, "a@x.com", "x").await;
    let (second, _) = login(&app, "a@x.com", "x").await;
    let (third, _) = login(&app, "a@x.com", "x").await;

    assert_ne!(first, StatusCode::TOO_MANY_REQUESTS);
    assert_ne!(second, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(third, StatusCode::TOO_MANY_REQUESTS);
}
