//! Shared helpers for API integration tests.
//!
//! Tests drive the real router (full middleware stack, same construction
//! as `main.rs`) via `tower::ServiceExt::oneshot`, without a TCP listener.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use govnav_api::auth::jwt::{generate_access_token, JwtConfig};
use govnav_api::config::ServerConfig;
use govnav_api::middleware::rate_limit::{RateLimitConfig, RateLimiter};
use govnav_api::router::build_app_router;
use govnav_api::state::AppState;
use govnav_api::store::SystemStore;
use govnav_core::types::EntityId;

/// Build a test `ServerConfig` with safe defaults.
///
/// The rate limit is set high enough that ordinary tests never trip it;
/// rate-limit tests pass their own config.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        rate_limit: RateLimitConfig {
            max_requests: 1000,
            window_secs: 60,
        },
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app() -> Router {
    build_test_app_with_config(test_config())
}

/// Build the app with a custom config (e.g. a tiny rate-limit window).
///
/// State lives inside the router; clone the returned `Router` to send
/// several requests against the same store and rate-limit counters.
pub fn build_test_app_with_config(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        systems: Arc::new(SystemStore::new()),
        rate_limiter: Arc::new(RateLimiter::new()),
    };
    build_app_router(state, &config)
}

/// A user identity plus a signed access token for it.
pub struct TestUser {
    pub id: EntityId,
    pub tenant_id: EntityId,
    pub token: String,
}

/// Mint a user in `tenant_id` with the given roles and a valid token.
pub fn test_user(config: &ServerConfig, tenant_id: EntityId, roles: &[&str]) -> TestUser {
    let id = Uuid::new_v4();
    let token = generate_access_token(id, "user@test.com", tenant_id, roles, &config.jwt)
        .expect("token generation should succeed");
    TestUser {
        id,
        tenant_id,
        token,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// POST with an empty body (decision endpoints take no payload).
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
