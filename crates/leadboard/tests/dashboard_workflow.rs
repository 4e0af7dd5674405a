use chrono::{TimeZone, Utc};
use leadboard::leads::analytics::AnalyticsAggregator;
use leadboard::leads::generator::{generate_crm_leads, generate_roofing_leads, seeded_rng};
use leadboard::leads::inbox::{write_csv, InboxRow};
use leadboard::leads::roster::{roofing_crew, sales_team, TeamWorkload};
use leadboard::leads::{
    CrmStatus, DashboardProfile, Inbox, LeadFilter, LeadRecord, RoiInputs, ScoringEngine, SortKey,
    SourceFilter, StatusFilter, Variant,
};

fn reference_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 24, 10, 0, 0)
        .single()
        .expect("valid reference time")
}

#[test]
fn roofing_dashboard_end_to_end() {
    let profile = DashboardProfile::roofing();
    let crew = roofing_crew();
    let leads = generate_roofing_leads(
        &profile.generator,
        &crew,
        reference_time(),
        &mut seeded_rng(Some(17)),
    );
    assert_eq!(leads.len(), profile.lead_count());

    let report = AnalyticsAggregator::new(profile.granularity, profile.period_count)
        .aggregate(&leads, reference_time());
    assert_eq!(report.total_leads, leads.len());
    assert_eq!(report.periods.len(), profile.period_count);
    assert_eq!(
        report.by_status.iter().map(|entry| entry.count).sum::<usize>(),
        leads.len()
    );
    assert_eq!(report.header.realized_revenue, report.revenue.realized);

    let ranked = ScoringEngine::default().rank(&leads, profile.scoring_limit);
    assert!(ranked.len() <= profile.scoring_limit);
    for pair in ranked.windows(2) {
        assert!(pair[0].score.priority_score >= pair[1].score.priority_score);
    }

    let workloads = TeamWorkload::collect(&crew, &leads);
    let assigned: usize = workloads.iter().map(|workload| workload.assigned).sum();
    assert_eq!(
        assigned,
        leads.iter().filter(|lead| lead.assigned_to.is_some()).count()
    );

    let roi = profile.roi_defaults.compute();
    assert_eq!(roi.projection(profile.projection_months).len(), 6);
}

#[test]
fn crm_dashboard_end_to_end() {
    let profile = Variant::SalesCrm.profile();
    let team = sales_team();
    let leads = generate_crm_leads(
        &profile.generator,
        &team,
        reference_time(),
        &mut seeded_rng(Some(5)),
    );

    let report = AnalyticsAggregator::new(profile.granularity, profile.period_count)
        .aggregate(&leads, reference_time());
    assert_eq!(report.funnel.len(), 5);
    assert_eq!(report.funnel[0].count, leads.len());
    assert_eq!(
        report.periods.iter().map(|bucket| bucket.leads).sum::<usize>(),
        leads.len()
    );

    let observed = RoiInputs::observed(&leads, profile.roi_defaults.fixed_monthly_cost);
    assert_eq!(observed.leads_per_month as usize, leads.len());

    let filter = LeadFilter {
        source: SourceFilter::All,
        status: "closed".parse::<StatusFilter<CrmStatus>>().expect("closed parses"),
    };
    let page = Inbox::new(&leads).page(&filter, SortKey::Value);
    assert!(page
        .rows
        .iter()
        .all(|lead| lead.realized_value().is_some()));

    let rows: Vec<InboxRow> = page.rows.iter().map(|lead| InboxRow::from_lead(*lead)).collect();
    let mut buffer = Vec::new();
    write_csv(&rows, &mut buffer).expect("csv export");
    let text = String::from_utf8(buffer).expect("utf8");
    assert_eq!(text.lines().count(), rows.len() + usize::from(!rows.is_empty()));
}
