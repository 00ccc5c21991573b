//! HTTP-level integration tests for per-identity rate limiting.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, test_user};
use uuid::Uuid;

use govnav_api::config::ServerConfig;
use govnav_api::middleware::rate_limit::RateLimitConfig;
use govnav_core::roles::ROLE_CONTRIBUTOR;

fn config_with_limit(max_requests: u32, window_secs: u64) -> ServerConfig {
    let mut config = common::test_config();
    config.rate_limit = RateLimitConfig {
        max_requests,
        window_secs,
    };
    config
}

/// The (N+1)th request within the window returns 429 with retryAfter and
/// a Retry-After header.
#[tokio::test]
async fn request_over_limit_returns_429() {
    let config = config_with_limit(3, 60);
    let app = common::build_test_app_with_config(config.clone());
    let user = test_user(&config, Uuid::new_v4(), &[ROLE_CONTRIBUTOR]);

    for _ in 0..3 {
        let response = get_auth(app.clone(), "/api/v1/systems", &user.token).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get_auth(app, "/api/v1/systems", &user.token).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let retry_header = response
        .headers()
        .get("retry-after")
        .expect("429 must carry a Retry-After header")
        .to_str()
        .unwrap()
        .parse::<u64>()
        .unwrap();
    assert!((1..=60).contains(&retry_header));

    let json = body_json(response).await;
    assert_eq!(json["code"], "RATE_LIMITED");
    let retry_after = json["retryAfter"].as_u64().unwrap();
    assert!((1..=60).contains(&retry_after));
}

/// Counters are keyed per identity: one user's burst does not throttle another.
#[tokio::test]
async fn limits_are_per_identity() {
    let config = config_with_limit(2, 60);
    let app = common::build_test_app_with_config(config.clone());
    let tenant = Uuid::new_v4();
    let noisy = test_user(&config, tenant, &[ROLE_CONTRIBUTOR]);
    let quiet = test_user(&config, tenant, &[ROLE_CONTRIBUTOR]);

    for _ in 0..2 {
        get_auth(app.clone(), "/api/v1/systems", &noisy.token).await;
    }
    let throttled = get_auth(app.clone(), "/api/v1/systems", &noisy.token).await;
    assert_eq!(throttled.status(), StatusCode::TOO_MANY_REQUESTS);

    let response = get_auth(app, "/api/v1/systems", &quiet.token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// After the window elapses the counter resets and requests succeed again.
#[tokio::test]
async fn window_elapse_resets_counter() {
    let config = config_with_limit(1, 1);
    let app = common::build_test_app_with_config(config.clone());
    let user = test_user(&config, Uuid::new_v4(), &[ROLE_CONTRIBUTOR]);

    let first = get_auth(app.clone(), "/api/v1/systems", &user.token).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = get_auth(app.clone(), "/api/v1/systems", &user.token).await;
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);

    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let third = get_auth(app, "/api/v1/systems", &user.token).await;
    assert_eq!(third.status(), StatusCode::OK);
}

/// Unauthenticated requests are keyed by client address.
#[tokio::test]
async fn anonymous_requests_keyed_by_address() {
    let config = config_with_limit(1, 60);
    let app = common::build_test_app_with_config(config);

    let request = |ip: &str| {
        axum::http::Request::builder()
            .uri("/api/v1/systems")
            .header("x-forwarded-for", ip)
            .body(axum::body::Body::empty())
            .unwrap()
    };

    // First request from this address consumes the budget (and then fails
    // auth); the second from the same address is throttled before auth.
    let first = tower::ServiceExt::oneshot(app.clone(), request("10.0.0.1")).await.unwrap();
    assert_eq!(first.status(), StatusCode::UNAUTHORIZED);

    let second = tower::ServiceExt::oneshot(app.clone(), request("10.0.0.1")).await.unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);

    let other = tower::ServiceExt::oneshot(app, request("10.0.0.2")).await.unwrap();
    assert_eq!(other.status(), StatusCode::UNAUTHORIZED);
}
