use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

/// Hours (UTC, half-open) during which the office answers inbound leads.
pub const BUSINESS_HOURS: Range<u32> = 7..19;

/// Returns true when the timestamp falls outside [`BUSINESS_HOURS`].
pub fn is_after_hours(at: DateTime<Utc>) -> bool {
    !BUSINESS_HOURS.contains(&at.hour())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValueError {
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    Unknown {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ParseValueError {
    fn unknown(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self::Unknown {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating {0} is outside 1..=10")]
pub struct RatingOutOfRange(pub u8);

/// Identifier wrapper for generated lead records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(pub String);

impl LeadId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Team member identifier. Leads hold it as a back-reference; members never own leads.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 1-10 rating used for emergency levels and quality scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Clamps any integer into the rating range.
    pub fn saturating(value: i32) -> Self {
        Self(value.clamp(Self::MIN as i32, Self::MAX as i32) as u8)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(RatingOutOfRange(value))
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    Chatbot,
    Phone,
}

impl LeadSource {
    pub const fn ordered() -> [Self; 2] {
        [Self::Chatbot, Self::Phone]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Chatbot => "Chatbot",
            Self::Phone => "Phone",
        }
    }
}

impl FromStr for LeadSource {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chatbot" => Ok(Self::Chatbot),
            "phone" => Ok(Self::Phone),
            _ => Err(ParseValueError::unknown("source", s, "chatbot, phone")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofingStatus {
    New,
    Emergency,
    Contacted,
    Scheduled,
    Converted,
}

impl RoofingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Emergency => "Emergency",
            Self::Contacted => "Contacted",
            Self::Scheduled => "Scheduled",
            Self::Converted => "Converted",
        }
    }

    /// New and emergency leads have not been responded to yet.
    pub const fn awaiting_response(self) -> bool {
        matches!(self, Self::New | Self::Emergency)
    }
}

impl FromStr for RoofingStatus {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "emergency" => Ok(Self::Emergency),
            "contacted" => Ok(Self::Contacted),
            "scheduled" => Ok(Self::Scheduled),
            "converted" => Ok(Self::Converted),
            _ => Err(ParseValueError::unknown(
                "roofing status",
                s,
                "new, emergency, contacted, scheduled, converted",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrmStatus {
    New,
    Contacted,
    Qualified,
    Proposal,
    Closed,
}

impl CrmStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Qualified => "Qualified",
            Self::Proposal => "Proposal",
            Self::Closed => "Closed",
        }
    }
}

impl FromStr for CrmStatus {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "qualified" => Ok(Self::Qualified),
            "proposal" => Ok(Self::Proposal),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseValueError::unknown(
                "crm status",
                s,
                "new, contacted, qualified, proposal, closed",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Emergency,
    Standard,
    Inspection,
    Quote,
}

impl JobType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Emergency => "Emergency",
            Self::Standard => "Standard",
            Self::Inspection => "Inspection",
            Self::Quote => "Quote",
        }
    }
}

/// Priority band shown next to generic CRM leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadPriority {
    High,
    Medium,
    Low,
}

impl LeadPriority {
    pub const fn from_score(score: u8) -> Self {
        if score >= 85 {
            Self::High
        } else if score >= 70 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Generic sales CRM lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrmLead {
    pub id: LeadId,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub source: LeadSource,
    pub score: u8,
    pub status: CrmStatus,
    pub assigned_to: MemberId,
    pub created_at: DateTime<Utc>,
    pub estimated_value: u32,
    pub priority: LeadPriority,
}

/// Roofing lead captured around the clock by chatbot or phone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofingLead {
    pub id: LeadId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub source: LeadSource,
    pub status: RoofingStatus,
    pub emergency_level: Rating,
    pub quality_score: Rating,
    pub created_at: DateTime<Utc>,
    pub captured_at: DateTime<Utc>,
    pub is_after_hours: bool,
    pub estimated_job_value: u32,
    pub job_type: JobType,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<MemberId>,
    /// Minutes until first response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_job_value: Option<u32>,
}

impl RoofingLead {
    pub fn is_emergency(&self) -> bool {
        self.status == RoofingStatus::Emergency
    }

    /// Converted job revenue: the actual value, or the estimate when no actual was recorded.
    pub fn realized_value(&self) -> Option<u32> {
        if self.status != RoofingStatus::Converted {
            return None;
        }
        match self.actual_job_value {
            Some(actual) if actual > 0 => Some(actual),
            _ => Some(self.estimated_job_value),
        }
    }

    /// Inbox priority order: emergency status first, then emergency level (desc),
    /// newest first, then id.
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        other
            .is_emergency()
            .cmp(&self.is_emergency())
            .then_with(|| other.emergency_level.cmp(&self.emergency_level))
            .then_with(|| other.created_at.cmp(&self.created_at))
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Field statistics tracked for roofing crews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStats {
    pub emergency_leads_count: u32,
    /// Minutes.
    pub avg_response_time: u32,
    pub revenue_generated: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub leads_count: u32,
    /// Percent.
    pub conversion_rate: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldStats>,
}
