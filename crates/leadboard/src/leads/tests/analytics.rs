use chrono::{Duration, TimeZone, Utc};

use super::common::{converted_lead, crm_lead, now, rating, roofing_lead};
use crate::leads::analytics::views::CaptureWindow;
use crate::leads::analytics::{AnalyticsAggregator, PeriodGranularity};
use crate::leads::domain::{CrmLead, CrmStatus, JobType, LeadSource, RoofingLead, RoofingStatus};
use crate::leads::generator::{generate_crm_leads, generate_roofing_leads, seeded_rng};
use crate::leads::profile::DashboardProfile;
use crate::leads::roster::{roofing_crew, sales_team};

fn sample_roofing() -> Vec<RoofingLead> {
    let overnight = Utc
        .with_ymd_and_hms(2025, 3, 11, 2, 0, 0)
        .single()
        .expect("valid capture time");

    vec![
        roofing_lead("lead-a", RoofingStatus::New),
        RoofingLead {
            source: LeadSource::Phone,
            emergency_level: rating(8),
            job_type: JobType::Emergency,
            captured_at: overnight,
            is_after_hours: true,
            ..roofing_lead("lead-b", RoofingStatus::Emergency)
        },
        RoofingLead {
            source: LeadSource::Phone,
            job_type: JobType::Emergency,
            response_time: Some(30),
            created_at: now() - Duration::days(10),
            captured_at: now() - Duration::days(10),
            ..converted_lead("lead-c", 1000, Some(1100))
        },
        converted_lead("lead-d", 800, None),
        RoofingLead {
            response_time: Some(60),
            ..roofing_lead("lead-e", RoofingStatus::Contacted)
        },
        RoofingLead {
            response_time: Some(90),
            job_type: JobType::Emergency,
            ..roofing_lead("lead-f", RoofingStatus::Scheduled)
        },
    ]
}

fn weekly() -> AnalyticsAggregator {
    AnalyticsAggregator::new(PeriodGranularity::Weekly, 4)
}

#[test]
fn source_and_capture_shares_sum_to_total() {
    let report = weekly().aggregate(&sample_roofing(), now());

    assert_eq!(report.total_leads, 6);
    let chatbot = &report.by_source[0];
    assert_eq!((chatbot.key, chatbot.count), (LeadSource::Chatbot, 4));
    assert!((chatbot.percentage - 66.666).abs() < 0.01);
    assert_eq!(report.by_source[1].count, 2);

    let after_hours = report
        .by_capture_window
        .iter()
        .find(|entry| entry.key == CaptureWindow::AfterHours)
        .expect("after-hours bucket");
    assert_eq!(after_hours.count, 1);
    assert_eq!(
        report
            .by_capture_window
            .iter()
            .map(|entry| entry.count)
            .sum::<usize>(),
        6
    );
}

#[test]
fn status_histogram_follows_canonical_order() {
    let report = weekly().aggregate(&sample_roofing(), now());
    let counts: Vec<(RoofingStatus, usize)> = report
        .by_status
        .iter()
        .map(|entry| (entry.status, entry.count))
        .collect();

    assert_eq!(
        counts,
        vec![
            (RoofingStatus::New, 1),
            (RoofingStatus::Emergency, 1),
            (RoofingStatus::Contacted, 1),
            (RoofingStatus::Scheduled, 1),
            (RoofingStatus::Converted, 2),
        ]
    );
}

#[test]
fn funnel_counts_leads_through_reached_stages() {
    let report = weekly().aggregate(&sample_roofing(), now());
    let funnel: Vec<(&str, usize, u32)> = report
        .funnel
        .iter()
        .map(|stage| (stage.stage, stage.count, stage.percentage))
        .collect();

    assert_eq!(
        funnel,
        vec![
            ("Leads", 6, 100),
            ("Contacted", 4, 67),
            ("Scheduled", 3, 50),
            ("Completed", 2, 33),
        ]
    );
}

#[test]
fn response_times_split_by_job_type() {
    let metrics = weekly().aggregate(&sample_roofing(), now()).response_times;

    assert_eq!(metrics.responded, 4);
    assert_eq!(metrics.avg_response_time, 75.0);
    assert_eq!(metrics.emergency_response_time, 60.0);
    assert_eq!(metrics.standard_response_time, 90.0);
}

#[test]
fn revenue_and_header_use_realized_values() {
    let report = weekly().aggregate(&sample_roofing(), now());

    assert_eq!(report.revenue.estimated_pipeline, 5400);
    assert_eq!(report.revenue.realized, 1900);
    assert_eq!(report.revenue.converted_leads, 2);
    assert_eq!(report.revenue.average_deal_size, 950.0);
    assert!((report.revenue.conversion_rate - 33.333).abs() < 0.01);

    let by_source: Vec<(LeadSource, usize, u64)> = report
        .revenue
        .by_source
        .iter()
        .map(|entry| (entry.source, entry.converted, entry.revenue))
        .collect();
    assert_eq!(
        by_source,
        vec![(LeadSource::Chatbot, 1, 800), (LeadSource::Phone, 1, 1100)]
    );

    assert_eq!(report.header.urgent_leads, 1);
    assert_eq!(report.header.new_leads, 1);
    assert_eq!(report.header.converted_leads, 2);
    assert_eq!(report.header.realized_revenue, 1900);
}

#[test]
fn weekly_periods_end_at_reference_time() {
    let periods = weekly().aggregate(&sample_roofing(), now()).periods;

    let labels: Vec<&str> = periods.iter().map(|bucket| bucket.label.as_str()).collect();
    assert_eq!(labels, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);

    assert_eq!(periods[2].leads, 1);
    assert_eq!(periods[2].emergency_jobs, 1);
    assert_eq!(periods[2].revenue, 1100);
    assert_eq!(periods[3].leads, 5);
    assert_eq!(periods[3].standard_jobs, 1);
    assert_eq!(periods[3].revenue, 800);
    assert_eq!(periods[0].leads + periods[1].leads, 0);
}

#[test]
fn empty_collection_yields_zeroes() {
    let report = weekly().aggregate::<RoofingLead>(&[], now());

    assert_eq!(report.total_leads, 0);
    assert!(report.by_source.iter().all(|entry| entry.percentage == 0.0));
    assert!(report
        .funnel
        .iter()
        .all(|stage| stage.count == 0 && stage.percentage == 0));
    assert_eq!(report.response_times.avg_response_time, 0.0);
    assert_eq!(report.revenue.conversion_rate, 0.0);
    assert_eq!(report.revenue.average_deal_size, 0.0);
    assert_eq!(report.periods.len(), 4);
}

fn crm_at(id: &str, status: CrmStatus, created: (i32, u32, u32)) -> CrmLead {
    let (year, month, day) = created;
    CrmLead {
        created_at: Utc
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("valid created date"),
        ..crm_lead(id, status, 80, 20_000)
    }
}

#[test]
fn crm_monthly_breakdown_and_funnel() {
    let leads = vec![
        crm_at("lead-1", CrmStatus::New, (2025, 3, 1)),
        crm_at("lead-2", CrmStatus::Closed, (2025, 2, 20)),
        crm_at("lead-3", CrmStatus::Contacted, (2024, 11, 1)),
    ];
    let report = AnalyticsAggregator::new(PeriodGranularity::Monthly, 3).aggregate(&leads, now());

    let periods: Vec<(&str, usize, u64)> = report
        .periods
        .iter()
        .map(|bucket| (bucket.label.as_str(), bucket.leads, bucket.revenue))
        .collect();
    assert_eq!(
        periods,
        vec![("Jan 2025", 0, 0), ("Feb 2025", 1, 20_000), ("Mar 2025", 1, 0)]
    );

    let funnel: Vec<(usize, u32)> = report
        .funnel
        .iter()
        .map(|stage| (stage.count, stage.percentage))
        .collect();
    assert_eq!(funnel, vec![(3, 100), (2, 67), (1, 33), (1, 33), (1, 33)]);
    assert_eq!(report.funnel[4].stage, "Closed");
    assert_eq!(report.revenue.realized, 20_000);
    assert_eq!(report.header.urgent_leads, 0);
}

#[test]
fn monthly_labels_cross_year_boundary() {
    let january = Utc
        .with_ymd_and_hms(2025, 1, 15, 9, 0, 0)
        .single()
        .expect("valid reference");
    let report =
        AnalyticsAggregator::new(PeriodGranularity::Monthly, 2).aggregate::<CrmLead>(&[], january);

    let labels: Vec<&str> = report
        .periods
        .iter()
        .map(|bucket| bucket.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Dec 2024", "Jan 2025"]);
}

#[test]
fn period_window_covers_generator_lookback() {
    assert_eq!(PeriodGranularity::Weekly.periods_covering(30), 5);
    assert_eq!(PeriodGranularity::Weekly.periods_covering(28), 4);
    assert_eq!(PeriodGranularity::Monthly.periods_covering(30), 3);
    assert_eq!(PeriodGranularity::Weekly.periods_covering(0), 1);
}

#[test]
fn default_profiles_bucket_every_generated_lead() {
    for seed in 0..16 {
        let profile = DashboardProfile::roofing();
        let leads = generate_roofing_leads(
            &profile.generator,
            &roofing_crew(),
            now(),
            &mut seeded_rng(Some(seed)),
        );
        let report = AnalyticsAggregator::new(profile.granularity, profile.period_count)
            .aggregate(&leads, now());
        let bucketed: usize = report.periods.iter().map(|bucket| bucket.leads).sum();
        assert_eq!(bucketed, report.total_leads, "roofing seed {seed}");

        let profile = DashboardProfile::sales_crm();
        let leads = generate_crm_leads(
            &profile.generator,
            &sales_team(),
            now(),
            &mut seeded_rng(Some(seed)),
        );
        let report = AnalyticsAggregator::new(profile.granularity, profile.period_count)
            .aggregate(&leads, now());
        let bucketed: usize = report.periods.iter().map(|bucket| bucket.leads).sum();
        assert_eq!(bucketed, report.total_leads, "crm seed {seed}");
    }
}
