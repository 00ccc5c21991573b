//! Route definitions for the `/qa` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::qa;
use crate::state::AppState;

/// Routes mounted at `/qa`.
///
/// ```text
/// GET /report   -> qa_report   (?path, admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/report", get(qa::qa_report))
}
