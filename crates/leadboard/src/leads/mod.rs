pub mod analytics;
pub mod display;
pub mod domain;
pub mod generator;
pub mod inbox;
pub mod live;
pub mod profile;
pub mod record;
pub mod roi;
pub mod roster;
pub mod scoring;

pub use analytics::{AnalyticsAggregator, AnalyticsReport, PeriodGranularity};
pub use domain::{
    is_after_hours, CrmLead, CrmStatus, JobType, LeadId, LeadPriority, LeadSource, MemberId,
    ParseValueError, Rating, RoofingLead, RoofingStatus, TeamMember,
};
pub use generator::{generate_crm_leads, generate_roofing_leads, seeded_rng, GeneratorConfig};
pub use inbox::{Inbox, InboxPage, LeadFilter, SortKey, SourceFilter, StatusFilter};
pub use live::LiveScoreJitter;
pub use profile::{DashboardProfile, Variant};
pub use record::{LeadRecord, PipelineStatus};
pub use roi::{RoiInputs, RoiResult};
pub use roster::{RosterSummary, TeamWorkload};
pub use scoring::{LeadScore, PriorityTier, ScoringConfig, ScoringEngine};

#[cfg(test)]
mod tests;
