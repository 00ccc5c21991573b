//! Handler exposing the project QA checkpoint engine.

use axum::extract::Query;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;

/// Query parameters for the QA report endpoint.
#[derive(Debug, Deserialize)]
pub struct QaReportParams {
    /// Project directory to audit (default: the server's working directory).
    pub path: Option<String>,
}

/// GET /api/v1/qa/report
///
/// Run the full checkpoint catalog against a project directory. Admin
/// only. The runner does blocking filesystem reads, so it is moved off
/// the async worker threads.
pub async fn qa_report(
    RequireAdmin(admin): RequireAdmin,
    Query(params): Query<QaReportParams>,
) -> AppResult<impl IntoResponse> {
    let project_path = PathBuf::from(params.path.unwrap_or_else(|| ".".to_string()));

    tracing::info!(user_id = %admin.id, path = %project_path.display(), "running QA report");

    let report = tokio::task::spawn_blocking(move || govnav_qa::validate(&project_path))
        .await
        .map_err(|e| AppError::InternalError(format!("QA run failed: {e}")))?;

    Ok(Json(DataResponse { data: report }))
}
