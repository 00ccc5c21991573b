//! Fixed-window request rate limiting.
//!
//! Process-wide in-memory store keyed by identity: the `sub` claim when
//! the request carries a valid token, the client address otherwise. Each
//! key gets `max_requests` per window; the window resets once
//! `window_secs` have elapsed. Exceeding the limit yields 429 with a
//! `retryAfter` field and `Retry-After` header.
//!
//! In-memory counting is single-instance only: running replicas would
//! need a shared store to enforce a global limit.

use std::collections::HashMap;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tokio::sync::Mutex;

use govnav_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::middleware::auth::bearer_token;
use crate::state::AppState;

/// Default requests allowed per window.
const DEFAULT_MAX_REQUESTS: u32 = 100;
/// Default window length in seconds.
const DEFAULT_WINDOW_SECS: u64 = 60;

/// Rate limiting configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Requests allowed per key per window.
    pub max_requests: u32,
    /// Window length in seconds.
    pub window_secs: u64,
}

impl RateLimitConfig {
    /// Load rate-limit configuration from environment variables.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `RATE_LIMIT_MAX_REQUESTS` | `100`   |
    /// | `RATE_LIMIT_WINDOW_SECS`  | `60`    |
    pub fn from_env() -> Self {
        let max_requests: u32 = std::env::var("RATE_LIMIT_MAX_REQUESTS")
            .unwrap_or_else(|_| DEFAULT_MAX_REQUESTS.to_string())
            .parse()
            .expect("RATE_LIMIT_MAX_REQUESTS must be a valid u32");

        let window_secs: u64 = std::env::var("RATE_LIMIT_WINDOW_SECS")
            .unwrap_or_else(|_| DEFAULT_WINDOW_SECS.to_string())
            .parse()
            .expect("RATE_LIMIT_WINDOW_SECS must be a valid u64");

        Self {
            max_requests,
            window_secs,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    started_at: Instant,
}

/// Process-wide fixed-window counters, one per key.
#[derive(Default)]
pub struct RateLimiter {
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one request for `key`. Returns `Ok(())` if allowed, or
    /// `Err(retry_after_secs)` when the key is over its window budget.
    pub async fn check(&self, key: &str, config: &RateLimitConfig) -> Result<(), u64> {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;
        let window = windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            started_at: now,
        });

        let elapsed_secs = now.duration_since(window.started_at).as_secs();
        if elapsed_secs >= config.window_secs {
            window.count = 0;
            window.started_at = now;
        }

        if window.count >= config.max_requests {
            let retry_after = config.window_secs.saturating_sub(elapsed_secs).max(1);
            return Err(retry_after);
        }

        window.count += 1;
        Ok(())
    }
}

/// Axum middleware enforcing the per-identity rate limit.
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(&request, &state);

    match state
        .rate_limiter
        .check(&key, &state.config.rate_limit)
        .await
    {
        Ok(()) => next.run(request).await,
        Err(retry_after_secs) => {
            tracing::warn!(key = %key, retry_after_secs, "rate limit exceeded");
            AppError::Core(CoreError::RateLimited { retry_after_secs }).into_response()
        }
    }
}

/// Rate-limit key for a request: the authenticated identity when the
/// token validates, the client address otherwise. Invalid tokens fall
/// through to the address key -- authentication itself rejects them later.
fn client_key(request: &Request, state: &AppState) -> String {
    if let Some(token) = bearer_token(request.headers()) {
        if let Ok(claims) = validate_token(token, &state.config.jwt) {
            return format!("user:{}", claims.sub);
        }
    }

    let ip = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .unwrap_or("unknown");
    format!("ip:{ip}")
}
