use super::config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Queue tier derived from the priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

pub(crate) fn tier_for(priority_score: u16, config: &ScoringConfig) -> PriorityTier {
    if priority_score >= config.critical_priority {
        PriorityTier::Critical
    } else if priority_score >= config.high_priority {
        PriorityTier::High
    } else if priority_score >= config.medium_priority {
        PriorityTier::Medium
    } else {
        PriorityTier::Low
    }
}

pub(crate) fn is_high_value_emergency(
    emergency_level: u8,
    estimated_job_value: u32,
    config: &ScoringConfig,
) -> bool {
    emergency_level >= config.urgent_emergency_level
        && estimated_job_value >= config.high_value_job
}
