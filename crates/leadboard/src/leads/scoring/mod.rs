mod config;
mod policy;
mod rules;

pub use super::domain::LeadPriority;
pub use config::ScoringConfig;
pub use policy::PriorityTier;

use super::domain::{LeadId, RoofingLead};
use serde::{Deserialize, Serialize};

/// Qualitative tag attached to a lead when its predicate fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    CriticalUrgency,
    HighUrgencyKeywords,
    WaterDamage,
    StormDamage,
    UrgentLanguage,
    AfterHoursEmergency,
    CompleteContactInfo,
    FullAddress,
    ClearJobDescription,
    AllContactMethods,
    DetailedNotes,
    SpecificJobType,
    JobValueEstimated,
    ReadyToProceed,
    ImmediateActionRequested,
    UrgentAndQualified,
    HighValueCompleteInfo,
    PhoneIntent,
    HighValueJob,
    EmergencyPremium,
    AboveAverageValue,
}

impl Indicator {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CriticalUrgency => "Critical urgency detected",
            Self::HighUrgencyKeywords => "High urgency keywords",
            Self::WaterDamage => "Water damage mentioned",
            Self::StormDamage => "Storm damage reported",
            Self::UrgentLanguage => "Urgent language used",
            Self::AfterHoursEmergency => "After-hours emergency",
            Self::CompleteContactInfo => "Complete contact information",
            Self::FullAddress => "Full address provided",
            Self::ClearJobDescription => "Clear job description",
            Self::AllContactMethods => "All contact methods available",
            Self::DetailedNotes => "Detailed notes provided",
            Self::SpecificJobType => "Specific job type identified",
            Self::JobValueEstimated => "Job value estimated",
            Self::ReadyToProceed => "Ready to proceed language",
            Self::ImmediateActionRequested => "Immediate action requested",
            Self::UrgentAndQualified => "High urgency + quality = ready",
            Self::HighValueCompleteInfo => "High value + complete info",
            Self::PhoneIntent => "Phone inquiry = high intent",
            Self::HighValueJob => "High-value job ($1,500+)",
            Self::EmergencyPremium => "Emergency premium pricing",
            Self::AboveAverageValue => "Above-average job value",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringFactors {
    pub emergency: Vec<Indicator>,
    pub quality: Vec<Indicator>,
    pub readiness: Vec<Indicator>,
    pub value: Vec<Indicator>,
}

impl ScoringFactors {
    pub fn total(&self) -> usize {
        self.emergency.len() + self.quality.len() + self.readiness.len() + self.value.len()
    }
}

/// Scoring output for one lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadScore {
    pub lead_id: LeadId,
    pub factors: ScoringFactors,
    pub readiness_score: u8,
    pub priority_score: u16,
    pub tier: PriorityTier,
    pub high_value_emergency: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredLead<'a> {
    pub lead: &'a RoofingLead,
    pub score: LeadScore,
}

/// Stateless scorer applying the configured thresholds to roofing leads.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, lead: &RoofingLead) -> LeadScore {
        let factors = rules::collect_factors(lead, &self.config);
        let readiness_score = rules::readiness_score(lead, &factors, &self.config);
        let priority_score = u16::from(lead.emergency_level.get()) * 2
            + u16::from(lead.quality_score.get())
            + u16::from(readiness_score);

        LeadScore {
            lead_id: lead.id.clone(),
            tier: policy::tier_for(priority_score, &self.config),
            high_value_emergency: policy::is_high_value_emergency(
                lead.emergency_level.get(),
                lead.estimated_job_value,
                &self.config,
            ),
            factors,
            readiness_score,
            priority_score,
        }
    }

    /// Scores every lead and returns the top `limit`, highest priority first.
    /// Equal priority scores fall back to lead id order.
    pub fn rank<'a>(&self, leads: &'a [RoofingLead], limit: usize) -> Vec<ScoredLead<'a>> {
        let mut scored: Vec<ScoredLead<'a>> = leads
            .iter()
            .map(|lead| ScoredLead {
                lead,
                score: self.score(lead),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .priority_score
                .cmp(&a.score.priority_score)
                .then_with(|| a.lead.id.cmp(&b.lead.id))
        });
        scored.truncate(limit);
        scored
    }
}
