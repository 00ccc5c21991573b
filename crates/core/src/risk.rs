//! AI-system risk classification.
//!
//! Provides the risk-tier vocabulary and the pure classification function
//! applied to every intake submission. Evaluation runs against answers the
//! caller collected from the intake form; nothing here reaches out to other
//! services.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Valid risk tier strings (stored on the system record and returned by the API).
pub const TIER_UNACCEPTABLE: &str = "unacceptable";
pub const TIER_HIGH: &str = "high";
pub const TIER_LIMITED: &str = "limited";
pub const TIER_MINIMAL: &str = "minimal";

/// All valid risk tier strings.
pub const VALID_RISK_TIERS: &[&str] = &[TIER_UNACCEPTABLE, TIER_HIGH, TIER_LIMITED, TIER_MINIMAL];

/// Application domains that classify a system as high-risk.
pub const HIGH_RISK_DOMAINS: &[&str] = &[
    "biometric_identification",
    "critical_infrastructure",
    "education",
    "employment",
    "essential_services",
    "law_enforcement",
    "migration_border_control",
    "justice",
];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The risk tier assigned to an AI system at intake.
///
/// Tiers are ordered: `Unacceptable` is the most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Unacceptable,
    High,
    Limited,
    Minimal,
}

impl RiskTier {
    /// Convert from a stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            TIER_UNACCEPTABLE => Ok(Self::Unacceptable),
            TIER_HIGH => Ok(Self::High),
            TIER_LIMITED => Ok(Self::Limited),
            TIER_MINIMAL => Ok(Self::Minimal),
            _ => Err(format!(
                "Invalid risk tier '{s}'. Must be one of: {}",
                VALID_RISK_TIERS.join(", ")
            )),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unacceptable => TIER_UNACCEPTABLE,
            Self::High => TIER_HIGH,
            Self::Limited => TIER_LIMITED,
            Self::Minimal => TIER_MINIMAL,
        }
    }
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// Intake answers relevant to risk classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Application domain (free-form; matched against [`HIGH_RISK_DOMAINS`]).
    pub domain: String,
    /// Whether the system performs a prohibited practice (e.g. social
    /// scoring, subliminal manipulation).
    pub prohibited_practice: bool,
    /// Whether the system interacts directly with natural persons.
    pub interacts_with_humans: bool,
    /// Whether the system generates or manipulates content.
    pub generates_content: bool,
}

// ---------------------------------------------------------------------------
// Evaluation functions
// ---------------------------------------------------------------------------

/// Classify an AI system's risk tier from its intake answers.
///
/// Severity wins: a prohibited practice is unacceptable regardless of
/// domain, a high-risk domain outranks transparency-only concerns.
pub fn classify_risk(profile: &RiskProfile) -> RiskTier {
    if profile.prohibited_practice {
        return RiskTier::Unacceptable;
    }
    if HIGH_RISK_DOMAINS.contains(&profile.domain.as_str()) {
        return RiskTier::High;
    }
    if profile.interacts_with_humans || profile.generates_content {
        return RiskTier::Limited;
    }
    RiskTier::Minimal
}
