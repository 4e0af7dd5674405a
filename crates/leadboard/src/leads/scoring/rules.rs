use super::super::domain::{JobType, LeadSource, RoofingLead};
use super::config::ScoringConfig;
use super::{Indicator, ScoringFactors};

const CRITICAL_URGENCY_LEVEL: u8 = 8;
const HIGH_URGENCY_LEVEL: u8 = 6;
const COMPLETE_INFO_QUALITY: u8 = 9;
const PHONE_INTENT_QUALITY: u8 = 7;
const DETAILED_NOTES_CHARS: usize = 50;
const PREMIUM_JOB_VALUE: u32 = 1500;
const ABOVE_AVERAGE_JOB_VALUE: u32 = 800;

fn mentions(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

pub(crate) fn collect_factors(lead: &RoofingLead, config: &ScoringConfig) -> ScoringFactors {
    let notes = lead.notes.to_lowercase();
    let level = lead.emergency_level.get();
    let quality = lead.quality_score.get();
    let value = lead.estimated_job_value;
    let mut factors = ScoringFactors::default();

    if level >= CRITICAL_URGENCY_LEVEL {
        factors.emergency.push(Indicator::CriticalUrgency);
    }
    if level >= HIGH_URGENCY_LEVEL {
        factors.emergency.push(Indicator::HighUrgencyKeywords);
    }
    if mentions(&notes, &["leak", "water"]) {
        factors.emergency.push(Indicator::WaterDamage);
    }
    if mentions(&notes, &["storm", "damage"]) {
        factors.emergency.push(Indicator::StormDamage);
    }
    if mentions(&notes, &["urgent", "asap"]) {
        factors.emergency.push(Indicator::UrgentLanguage);
    }
    if lead.is_after_hours && level >= HIGH_URGENCY_LEVEL {
        factors.emergency.push(Indicator::AfterHoursEmergency);
    }

    if quality >= COMPLETE_INFO_QUALITY {
        factors.quality.extend([
            Indicator::CompleteContactInfo,
            Indicator::FullAddress,
            Indicator::ClearJobDescription,
        ]);
    }
    if !lead.phone.is_empty() && !lead.email.is_empty() && !lead.address.is_empty() {
        factors.quality.push(Indicator::AllContactMethods);
    }
    if lead.notes.chars().count() > DETAILED_NOTES_CHARS {
        factors.quality.push(Indicator::DetailedNotes);
    }
    if lead.job_type != JobType::Quote {
        factors.quality.push(Indicator::SpecificJobType);
    }
    if value > 0 {
        factors.quality.push(Indicator::JobValueEstimated);
    }

    if mentions(&notes, &["ready", "now"]) {
        factors.readiness.push(Indicator::ReadyToProceed);
    }
    if mentions(&notes, &["immediate", "asap"]) {
        factors.readiness.push(Indicator::ImmediateActionRequested);
    }
    if level >= config.urgent_emergency_level && quality >= config.ready_quality_score {
        factors.readiness.push(Indicator::UrgentAndQualified);
    }
    if value >= config.high_value_job && quality >= config.ready_quality_score {
        factors.readiness.push(Indicator::HighValueCompleteInfo);
    }
    if lead.source == LeadSource::Phone && quality >= PHONE_INTENT_QUALITY {
        factors.readiness.push(Indicator::PhoneIntent);
    }

    if value >= PREMIUM_JOB_VALUE {
        factors.value.push(Indicator::HighValueJob);
    }
    if lead.job_type == JobType::Emergency && value >= config.high_value_job {
        factors.value.push(Indicator::EmergencyPremium);
    }
    if value >= ABOVE_AVERAGE_JOB_VALUE {
        factors.value.push(Indicator::AboveAverageValue);
    }

    factors
}

pub(crate) fn readiness_score(
    lead: &RoofingLead,
    factors: &ScoringFactors,
    config: &ScoringConfig,
) -> u8 {
    let mut score: u8 = 0;
    if lead.emergency_level.get() >= config.urgent_emergency_level {
        score += 3;
    }
    if lead.quality_score.get() >= config.ready_quality_score {
        score += 3;
    }
    if factors.readiness.len() >= config.readiness_indicator_count {
        score += 2;
    }
    if lead.estimated_job_value >= config.high_value_job {
        score += 2;
    }
    score.min(config.readiness_cap)
}
