use super::super::domain::{
    CrmLead, CrmStatus, LeadId, LeadPriority, LeadSource, MemberId, TeamMember,
};
use super::super::record::PipelineStatus;
use super::vocabulary::{COMPANIES, CONTACT_NAMES};
use super::{chance, email_for, pick, GeneratorConfig};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::debug;

/// Generates generic CRM leads in generation order.
pub fn generate_crm_leads<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    roster: &[TeamMember],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<CrmLead> {
    let leads: Vec<CrmLead> = (0..config.lead_count)
        .map(|index| {
            let score: u8 = rng.random_range(60..100);
            let source = if chance(rng, config.chatbot_share) {
                LeadSource::Chatbot
            } else {
                LeadSource::Phone
            };
            let company = pick(rng, COMPANIES);
            let name = pick(rng, CONTACT_NAMES);
            let created_at =
                now - Duration::days(i64::from(rng.random_range(0..config.lookback_days.max(1))));
            let domain = format!("{}.com", company.to_lowercase().replacen(' ', "", 1));
            let phone = format!(
                "+1-{}-{}-{}",
                rng.random_range(100..1000),
                rng.random_range(100..1000),
                rng.random_range(1000..10000)
            );
            let status = CrmStatus::ALL[rng.random_range(0..CrmStatus::ALL.len())];
            let assigned_to = if roster.is_empty() {
                MemberId("unassigned".to_string())
            } else {
                roster[rng.random_range(0..roster.len())].id.clone()
            };

            CrmLead {
                id: LeadId(format!("lead-{}", index + 1)),
                name: name.to_string(),
                company: company.to_string(),
                email: email_for(name, &domain),
                phone,
                source,
                score,
                status,
                assigned_to,
                created_at,
                estimated_value: rng.random_range(10_000..60_000),
                priority: LeadPriority::from_score(score),
            }
        })
        .collect();

    debug!(count = leads.len(), "generated crm leads");
    leads
}
