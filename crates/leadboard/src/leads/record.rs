use super::domain::{
    CrmLead, CrmStatus, JobType, LeadId, LeadSource, MemberId, RoofingLead, RoofingStatus,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Status lifecycle shared by both dashboard variants.
pub trait PipelineStatus: Copy + Eq + Hash + fmt::Debug + Serialize + 'static {
    /// Canonical display order.
    const ALL: &'static [Self];
    /// Funnel stage labels, first stage covering every lead.
    const FUNNEL: &'static [&'static str];

    fn label(self) -> &'static str;

    /// Index of the deepest funnel stage a lead with this status has reached.
    fn funnel_depth(self) -> usize;

    fn is_converted(self) -> bool;

    fn is_new(self) -> bool;
}

impl PipelineStatus for RoofingStatus {
    const ALL: &'static [Self] = &[
        Self::New,
        Self::Emergency,
        Self::Contacted,
        Self::Scheduled,
        Self::Converted,
    ];
    const FUNNEL: &'static [&'static str] = &["Leads", "Contacted", "Scheduled", "Completed"];

    fn label(self) -> &'static str {
        RoofingStatus::label(self)
    }

    fn funnel_depth(self) -> usize {
        match self {
            Self::New | Self::Emergency => 0,
            Self::Contacted => 1,
            Self::Scheduled => 2,
            Self::Converted => 3,
        }
    }

    fn is_converted(self) -> bool {
        self == Self::Converted
    }

    fn is_new(self) -> bool {
        self == Self::New
    }
}

impl PipelineStatus for CrmStatus {
    const ALL: &'static [Self] = &[
        Self::New,
        Self::Contacted,
        Self::Qualified,
        Self::Proposal,
        Self::Closed,
    ];
    const FUNNEL: &'static [&'static str] =
        &["New Leads", "Contacted", "Qualified", "Proposal", "Closed"];

    fn label(self) -> &'static str {
        CrmStatus::label(self)
    }

    fn funnel_depth(self) -> usize {
        match self {
            Self::New => 0,
            Self::Contacted => 1,
            Self::Qualified => 2,
            Self::Proposal => 3,
            Self::Closed => 4,
        }
    }

    fn is_converted(self) -> bool {
        self == Self::Closed
    }

    fn is_new(self) -> bool {
        self == Self::New
    }
}

/// Read-only view over a lead that the inbox, analytics and roster rollups consume.
pub trait LeadRecord {
    type Status: PipelineStatus;

    fn id(&self) -> &LeadId;
    fn name(&self) -> &str;
    /// Secondary line shown under the name (company or address).
    fn headline(&self) -> &str;
    fn source(&self) -> LeadSource;
    fn status(&self) -> Self::Status;
    fn created_at(&self) -> DateTime<Utc>;

    fn captured_at(&self) -> DateTime<Utc> {
        self.created_at()
    }

    fn assigned_to(&self) -> Option<&MemberId>;

    /// Estimated value of the opportunity.
    fn pipeline_value(&self) -> u32;

    /// Revenue booked for a converted lead; `None` otherwise.
    fn realized_value(&self) -> Option<u32>;

    /// Lead needs attention before the rest of the queue.
    fn is_urgent(&self) -> bool {
        false
    }

    /// Lead is for emergency work (as opposed to standard work).
    fn is_emergency_job(&self) -> bool {
        false
    }

    fn response_time(&self) -> Option<u32> {
        None
    }

    /// Ordering used by the "priority" inbox sort.
    fn priority_cmp(&self, other: &Self) -> Ordering;
}

impl LeadRecord for RoofingLead {
    type Status = RoofingStatus;

    fn id(&self) -> &LeadId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn headline(&self) -> &str {
        &self.address
    }

    fn source(&self) -> LeadSource {
        self.source
    }

    fn status(&self) -> RoofingStatus {
        self.status
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    fn assigned_to(&self) -> Option<&MemberId> {
        self.assigned_to.as_ref()
    }

    fn pipeline_value(&self) -> u32 {
        self.estimated_job_value
    }

    fn realized_value(&self) -> Option<u32> {
        RoofingLead::realized_value(self)
    }

    fn is_urgent(&self) -> bool {
        self.is_emergency() || self.emergency_level.get() >= 7
    }

    fn is_emergency_job(&self) -> bool {
        self.job_type == JobType::Emergency
    }

    fn response_time(&self) -> Option<u32> {
        self.response_time
    }

    fn priority_cmp(&self, other: &Self) -> Ordering {
        RoofingLead::priority_cmp(self, other)
    }
}

impl LeadRecord for CrmLead {
    type Status = CrmStatus;

    fn id(&self) -> &LeadId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn headline(&self) -> &str {
        &self.company
    }

    fn source(&self) -> LeadSource {
        self.source
    }

    fn status(&self) -> CrmStatus {
        self.status
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn assigned_to(&self) -> Option<&MemberId> {
        Some(&self.assigned_to)
    }

    fn pipeline_value(&self) -> u32 {
        self.estimated_value
    }

    fn realized_value(&self) -> Option<u32> {
        (self.status == CrmStatus::Closed).then_some(self.estimated_value)
    }

    fn priority_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.id.cmp(&other.id))
    }
}
