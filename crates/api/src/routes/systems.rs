//! Route definitions for the `/systems` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::systems;
use crate::state::AppState;

/// Routes mounted at `/systems`.
///
/// ```text
/// GET    /               -> list_systems
/// POST   /               -> create_system
/// GET    /{id}           -> get_system
/// POST   /{id}/approve   -> approve_system
/// POST   /{id}/reject    -> reject_system
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(systems::list_systems).post(systems::create_system))
        .route("/{id}", get(systems::get_system))
        .route("/{id}/approve", post(systems::approve_system))
        .route("/{id}/reject", post(systems::reject_system))
}
