mod periods;
mod summary;
pub mod views;

pub use periods::PeriodGranularity;
pub use summary::{
    capture_window_shares, conversion_funnel, header_metrics, percent_of, response_times,
    revenue_rollup, source_shares, status_histogram, AnalyticsAggregator,
};
pub use views::{AnalyticsReport, CaptureWindow, FunnelStage, PeriodBucket, ShareEntry};
