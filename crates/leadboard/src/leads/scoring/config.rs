use serde::{Deserialize, Serialize};

/// Thresholds for the readiness and priority heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub urgent_emergency_level: u8,
    pub ready_quality_score: u8,
    pub readiness_indicator_count: usize,
    pub high_value_job: u32,
    pub readiness_cap: u8,
    pub critical_priority: u16,
    pub high_priority: u16,
    pub medium_priority: u16,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            urgent_emergency_level: 7,
            ready_quality_score: 8,
            readiness_indicator_count: 2,
            high_value_job: 1000,
            readiness_cap: 10,
            critical_priority: 30,
            high_priority: 25,
            medium_priority: 20,
        }
    }
}
