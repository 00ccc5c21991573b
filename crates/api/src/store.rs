//! In-memory AI-system registry.
//!
//! Registered systems live for the lifetime of the process; there is no
//! persistence layer. All reads and decisions are tenant-scoped -- a
//! system belonging to another tenant is indistinguishable from one that
//! does not exist.

use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::RwLock;

use govnav_core::approval::{check_segregation, is_decidable, STATUS_APPROVED, STATUS_REJECTED};
use govnav_core::error::CoreError;
use govnav_core::risk::RiskTier;
use govnav_core::types::{EntityId, Timestamp};

/// A registered AI system and its governance state.
#[derive(Debug, Clone, Serialize)]
pub struct AiSystem {
    pub id: EntityId,
    pub tenant_id: EntityId,
    pub name: String,
    pub purpose: String,
    pub domain: String,
    pub risk_tier: RiskTier,
    /// Lifecycle status (see `govnav_core::approval`).
    pub status: String,
    pub created_by: EntityId,
    /// Reviewer who recorded the final decision, if any.
    pub decided_by: Option<EntityId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Thread-safe registry of AI systems.
///
/// Designed to be wrapped in `Arc` and shared across the application.
/// Decisions (approve/reject) run entirely under one write lock so the
/// segregation-of-duties check and the status transition are atomic.
#[derive(Default)]
pub struct SystemStore {
    systems: RwLock<HashMap<EntityId, AiSystem>>,
}

impl SystemStore {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new system.
    pub async fn insert(&self, system: AiSystem) {
        self.systems.write().await.insert(system.id, system);
    }

    /// Fetch one system, scoped to `tenant_id`.
    pub async fn get(&self, tenant_id: EntityId, id: EntityId) -> Result<AiSystem, CoreError> {
        self.systems
            .read()
            .await
            .get(&id)
            .filter(|s| s.tenant_id == tenant_id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: "AiSystem",
                id,
            })
    }

    /// List a tenant's systems, newest first.
    pub async fn list_for_tenant(&self, tenant_id: EntityId) -> Vec<AiSystem> {
        let mut systems: Vec<AiSystem> = self
            .systems
            .read()
            .await
            .values()
            .filter(|s| s.tenant_id == tenant_id)
            .cloned()
            .collect();
        systems.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        systems
    }

    /// Record an approval for a system.
    ///
    /// Fails closed: an unknown (or foreign-tenant) system is `NotFound`,
    /// a creator deciding on their own system is `Forbidden`, and a system
    /// already decided is a `Conflict`.
    pub async fn approve(
        &self,
        tenant_id: EntityId,
        id: EntityId,
        reviewer: EntityId,
    ) -> Result<AiSystem, CoreError> {
        self.decide(tenant_id, id, reviewer, STATUS_APPROVED).await
    }

    /// Record a rejection for a system. Same policy checks as approval.
    pub async fn reject(
        &self,
        tenant_id: EntityId,
        id: EntityId,
        reviewer: EntityId,
    ) -> Result<AiSystem, CoreError> {
        self.decide(tenant_id, id, reviewer, STATUS_REJECTED).await
    }

    async fn decide(
        &self,
        tenant_id: EntityId,
        id: EntityId,
        reviewer: EntityId,
        new_status: &str,
    ) -> Result<AiSystem, CoreError> {
        let mut systems = self.systems.write().await;

        let system = systems
            .get_mut(&id)
            .filter(|s| s.tenant_id == tenant_id)
            .ok_or(CoreError::NotFound {
                entity: "AiSystem",
                id,
            })?;

        check_segregation(system.created_by, reviewer)?;

        if !is_decidable(&system.status) {
            return Err(CoreError::Conflict(format!(
                "System is already {}",
                system.status
            )));
        }

        system.status = new_status.to_string();
        system.decided_by = Some(reviewer);
        system.updated_at = chrono::Utc::now();
        Ok(system.clone())
    }
}
