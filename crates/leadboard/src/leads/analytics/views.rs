use super::super::domain::LeadSource;
use super::super::record::PipelineStatus;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureWindow {
    BusinessHours,
    AfterHours,
}

impl CaptureWindow {
    pub const fn ordered() -> [Self; 2] {
        [Self::BusinessHours, Self::AfterHours]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BusinessHours => "Business Hours",
            Self::AfterHours => "After Hours",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareEntry<K> {
    pub key: K,
    pub label: &'static str,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount<S: PipelineStatus> {
    pub status: S,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunnelStage {
    pub stage: &'static str,
    pub count: usize,
    /// Whole percent of the first stage.
    pub percentage: u32,
}

/// Average minutes to first response; zero when no lead in the group has responded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponseTimeMetrics {
    pub avg_response_time: f64,
    pub emergency_response_time: f64,
    pub standard_response_time: f64,
    pub responded: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodBucket {
    pub label: String,
    pub leads: usize,
    pub emergency_jobs: usize,
    pub standard_jobs: usize,
    pub revenue: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRevenue {
    pub source: LeadSource,
    pub label: &'static str,
    pub leads: usize,
    pub converted: usize,
    pub revenue: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueRollup {
    /// Sum of estimated values across every lead.
    pub estimated_pipeline: u64,
    pub realized: u64,
    pub converted_leads: usize,
    /// Percent of all leads that converted.
    pub conversion_rate: f64,
    pub average_deal_size: f64,
    pub by_source: Vec<SourceRevenue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderMetrics {
    pub total_leads: usize,
    pub urgent_leads: usize,
    pub new_leads: usize,
    pub converted_leads: usize,
    pub realized_revenue: u64,
}

/// Point-in-time projection of a lead collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport<S: PipelineStatus> {
    pub total_leads: usize,
    pub by_source: Vec<ShareEntry<LeadSource>>,
    pub by_capture_window: Vec<ShareEntry<CaptureWindow>>,
    pub by_status: Vec<StatusCount<S>>,
    pub funnel: Vec<FunnelStage>,
    pub response_times: ResponseTimeMetrics,
    pub periods: Vec<PeriodBucket>,
    pub revenue: RevenueRollup,
    pub header: HeaderMetrics,
}
