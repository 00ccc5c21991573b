pub mod health;
pub mod qa;
pub mod systems;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /systems                  list (GET), register (POST)       auth required
/// /systems/{id}             get                               auth required
/// /systems/{id}/approve     record approval (POST)            compliance officer / admin
/// /systems/{id}/reject      record rejection (POST)           compliance officer / admin
///
/// /qa/report                run checkpoint catalog (GET)      admin only
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/systems", systems::router())
        .nest("/qa", qa::router())
}
