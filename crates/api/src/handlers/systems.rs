//! Handlers for the AI-system governance workflow.
//!
//! Provides endpoints for registering systems (intake), browsing a
//! tenant's registry, and recording approval decisions. Decisions are
//! restricted to compliance officers and guarded by segregation of
//! duties: the creator of a system can never decide on it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use govnav_core::approval::STATUS_PENDING_REVIEW;
use govnav_core::error::CoreError;
use govnav_core::risk::{classify_risk, RiskProfile};
use govnav_core::types::EntityId;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireComplianceOfficer;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::store::AiSystem;

/// Intake form for registering an AI system.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSystemRequest {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 2000, message = "purpose must be 1-2000 characters"))]
    pub purpose: String,
    #[validate(length(min = 1, max = 100, message = "domain must be 1-100 characters"))]
    pub domain: String,
    #[serde(default)]
    pub prohibited_practice: bool,
    #[serde(default)]
    pub interacts_with_humans: bool,
    #[serde(default)]
    pub generates_content: bool,
}

/// POST /api/v1/systems
///
/// Register an AI system for governance review. The risk tier is
/// classified automatically from the intake answers; the system enters
/// the review queue as `pending_review`.
pub async fn create_system(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSystemRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let profile = RiskProfile {
        domain: input.domain.clone(),
        prohibited_practice: input.prohibited_practice,
        interacts_with_humans: input.interacts_with_humans,
        generates_content: input.generates_content,
    };
    let risk_tier = classify_risk(&profile);

    let now = chrono::Utc::now();
    let system = AiSystem {
        id: Uuid::new_v4(),
        tenant_id: auth.tenant_id,
        name: input.name,
        purpose: input.purpose,
        domain: input.domain,
        risk_tier,
        status: STATUS_PENDING_REVIEW.to_string(),
        created_by: auth.id,
        decided_by: None,
        created_at: now,
        updated_at: now,
    };

    state.systems.insert(system.clone()).await;

    tracing::info!(
        user_id = %auth.id,
        tenant_id = %auth.tenant_id,
        system_id = %system.id,
        risk_tier = system.risk_tier.as_str(),
        "AI system registered"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: system })))
}

/// GET /api/v1/systems
///
/// List the authenticated tenant's systems, newest first.
pub async fn list_systems(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let systems = state.systems.list_for_tenant(auth.tenant_id).await;
    Ok(Json(DataResponse { data: systems }))
}

/// GET /api/v1/systems/{id}
pub async fn get_system(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let system = state.systems.get(auth.tenant_id, id).await?;
    Ok(Json(DataResponse { data: system }))
}

/// POST /api/v1/systems/{id}/approve
///
/// Record an approval decision. Requires the compliance-officer (or
/// admin) role; segregation of duties rejects the system's own creator.
pub async fn approve_system(
    RequireComplianceOfficer(reviewer): RequireComplianceOfficer,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let system = state
        .systems
        .approve(reviewer.tenant_id, id, reviewer.id)
        .await?;

    tracing::info!(
        user_id = %reviewer.id,
        system_id = %system.id,
        "AI system approved"
    );

    Ok(Json(DataResponse { data: system }))
}

/// POST /api/v1/systems/{id}/reject
///
/// Record a rejection decision. Same authorization and segregation rules
/// as approval.
pub async fn reject_system(
    RequireComplianceOfficer(reviewer): RequireComplianceOfficer,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let system = state
        .systems
        .reject(reviewer.tenant_id, id, reviewer.id)
        .await?;

    tracing::info!(
        user_id = %reviewer.id,
        system_id = %system.id,
        "AI system rejected"
    );

    Ok(Json(DataResponse { data: system }))
}
