use std::sync::Arc;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::RateLimiter;
use crate::store::SystemStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// In-memory AI-system registry.
    pub systems: Arc<SystemStore>,
    /// Process-wide rate-limit counters.
    pub rate_limiter: Arc<RateLimiter>,
}
