use super::super::domain::{is_after_hours, LeadSource};
use super::super::record::{LeadRecord, PipelineStatus};
use super::periods::{breakdown, PeriodGranularity};
use super::views::{
    AnalyticsReport, CaptureWindow, FunnelStage, HeaderMetrics, ResponseTimeMetrics,
    RevenueRollup, ShareEntry, SourceRevenue, StatusCount,
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Share of `count` in `total` as a percentage; zero when `total` is zero.
pub fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().map(|&value| f64::from(value)).sum::<f64>() / values.len() as f64
    }
}

/// Recomputes every dashboard aggregate from a lead collection.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsAggregator {
    granularity: PeriodGranularity,
    periods: usize,
}

impl AnalyticsAggregator {
    pub fn new(granularity: PeriodGranularity, periods: usize) -> Self {
        Self {
            granularity,
            periods,
        }
    }

    pub fn aggregate<L: LeadRecord>(
        &self,
        leads: &[L],
        now: DateTime<Utc>,
    ) -> AnalyticsReport<L::Status> {
        let total_leads = leads.len();

        let report = AnalyticsReport {
            total_leads,
            by_source: source_shares(leads),
            by_capture_window: capture_window_shares(leads),
            by_status: status_histogram(leads),
            funnel: conversion_funnel(leads),
            response_times: response_times(leads),
            periods: breakdown(leads, self.granularity, self.periods, now),
            revenue: revenue_rollup(leads),
            header: header_metrics(leads),
        };

        debug!(
            total_leads,
            converted = report.revenue.converted_leads,
            "analytics recomputed"
        );
        report
    }
}

pub fn source_shares<L: LeadRecord>(leads: &[L]) -> Vec<ShareEntry<LeadSource>> {
    LeadSource::ordered()
        .into_iter()
        .map(|source| {
            let count = leads.iter().filter(|lead| lead.source() == source).count();
            ShareEntry {
                key: source,
                label: source.label(),
                count,
                percentage: percent_of(count, leads.len()),
            }
        })
        .collect()
}

pub fn capture_window_shares<L: LeadRecord>(leads: &[L]) -> Vec<ShareEntry<CaptureWindow>> {
    let after_hours = leads
        .iter()
        .filter(|lead| is_after_hours(lead.captured_at()))
        .count();

    CaptureWindow::ordered()
        .into_iter()
        .map(|window| {
            let count = match window {
                CaptureWindow::BusinessHours => leads.len() - after_hours,
                CaptureWindow::AfterHours => after_hours,
            };
            ShareEntry {
                key: window,
                label: window.label(),
                count,
                percentage: percent_of(count, leads.len()),
            }
        })
        .collect()
}

pub fn status_histogram<L: LeadRecord>(leads: &[L]) -> Vec<StatusCount<L::Status>> {
    L::Status::ALL
        .iter()
        .map(|&status| StatusCount {
            status,
            label: status.label(),
            count: leads.iter().filter(|lead| lead.status() == status).count(),
        })
        .collect()
}

/// A lead counts toward every stage up to its status depth, so counts never increase.
pub fn conversion_funnel<L: LeadRecord>(leads: &[L]) -> Vec<FunnelStage> {
    let counts: Vec<usize> = (0..L::Status::FUNNEL.len())
        .map(|depth| {
            leads
                .iter()
                .filter(|lead| lead.status().funnel_depth() >= depth)
                .count()
        })
        .collect();
    let baseline = counts.first().copied().unwrap_or(0);

    L::Status::FUNNEL
        .iter()
        .zip(counts)
        .map(|(&stage, count)| FunnelStage {
            stage,
            count,
            percentage: percent_of(count, baseline).round() as u32,
        })
        .collect()
}

pub fn response_times<L: LeadRecord>(leads: &[L]) -> ResponseTimeMetrics {
    let mut all = Vec::new();
    let mut emergency = Vec::new();
    let mut standard = Vec::new();

    for lead in leads {
        let Some(minutes) = lead.response_time() else {
            continue;
        };
        all.push(minutes);
        if lead.is_emergency_job() {
            emergency.push(minutes);
        } else {
            standard.push(minutes);
        }
    }

    ResponseTimeMetrics {
        avg_response_time: mean(&all),
        emergency_response_time: mean(&emergency),
        standard_response_time: mean(&standard),
        responded: all.len(),
    }
}

pub fn revenue_rollup<L: LeadRecord>(leads: &[L]) -> RevenueRollup {
    let estimated_pipeline = leads
        .iter()
        .map(|lead| u64::from(lead.pipeline_value()))
        .sum();
    let realized_values: Vec<u32> = leads.iter().filter_map(|lead| lead.realized_value()).collect();
    let realized: u64 = realized_values.iter().map(|&value| u64::from(value)).sum();
    let converted_leads = realized_values.len();

    let by_source = LeadSource::ordered()
        .into_iter()
        .map(|source| {
            let from_source: Vec<&L> = leads.iter().filter(|lead| lead.source() == source).collect();
            let converted: Vec<u32> = from_source
                .iter()
                .filter_map(|lead| lead.realized_value())
                .collect();
            SourceRevenue {
                source,
                label: source.label(),
                leads: from_source.len(),
                converted: converted.len(),
                revenue: converted.iter().map(|&value| u64::from(value)).sum(),
            }
        })
        .collect();

    RevenueRollup {
        estimated_pipeline,
        realized,
        converted_leads,
        conversion_rate: percent_of(converted_leads, leads.len()),
        average_deal_size: mean(&realized_values),
        by_source,
    }
}

pub fn header_metrics<L: LeadRecord>(leads: &[L]) -> HeaderMetrics {
    let converted: Vec<u32> = leads.iter().filter_map(|lead| lead.realized_value()).collect();

    HeaderMetrics {
        total_leads: leads.len(),
        urgent_leads: leads.iter().filter(|lead| lead.is_urgent()).count(),
        new_leads: leads.iter().filter(|lead| lead.status().is_new()).count(),
        converted_leads: converted.len(),
        realized_revenue: converted.iter().map(|&value| u64::from(value)).sum(),
    }
}
