use crate::cli::{InboxArgs, RoiArgs, ScoringArgs};
use crate::infra::{Dataset, Session};
use leadboard::error::AppError;
use leadboard::leads::analytics::views::AnalyticsReport;
use leadboard::leads::display::{format_datetime, relative_age, CAPTURE_PATTERN};
use leadboard::leads::inbox::InboxPage;
use leadboard::leads::roi::{parse_input, ProjectionMonth};
use leadboard::leads::scoring::ScoredLead;
use leadboard::leads::{
    AnalyticsAggregator, CrmStatus, Inbox, LeadFilter, LeadRecord, LiveScoreJitter,
    ParseValueError, PipelineStatus, RoiInputs, RoiResult, RoofingStatus, RosterSummary,
    ScoringEngine, SortKey, TeamMember, TeamWorkload,
};
use serde::Serialize;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::debug;

pub(crate) fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)
        .map_err(|err| AppError::Render(err.to_string()))?;
    writeln!(out)?;
    Ok(())
}

/// `$12,345` style amounts, rounded to whole dollars.
pub(crate) fn dollars(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn inbox_filter<S>(args: &InboxArgs) -> Result<LeadFilter<S>, AppError>
where
    S: PipelineStatus + FromStr<Err = ParseValueError>,
{
    Ok(LeadFilter {
        source: args.source,
        status: args.status.parse()?,
    })
}

fn export_csv<L: LeadRecord>(
    leads: &[L],
    filter: &LeadFilter<L::Status>,
    sort: SortKey,
) -> Result<(), AppError> {
    let exported = Inbox::new(leads).export_csv(filter, sort, io::stdout().lock())?;
    debug!(exported, "inbox exported as csv");
    Ok(())
}

fn print_page_header<L: LeadRecord>(
    page: &InboxPage<'_, L>,
    filter: &LeadFilter<L::Status>,
    sort: SortKey,
) -> bool {
    println!(
        "Inbox: {} matching leads (source {}, status {}, sort {})",
        page.total_matches,
        filter.source.label(),
        filter.status.label(),
        sort.label()
    );
    match page.empty_message() {
        Some(message) => {
            println!("{message}");
            false
        }
        None => true,
    }
}

pub(crate) fn inbox(session: &Session, args: &InboxArgs) -> Result<(), AppError> {
    let limit = args.limit.unwrap_or(session.profile.inbox_limit);

    match &session.dataset {
        Dataset::Roofing(leads) => {
            let filter: LeadFilter<RoofingStatus> = inbox_filter(args)?;
            if args.csv {
                return export_csv(leads, &filter, args.sort);
            }
            let page = Inbox::new(leads).with_limit(limit).page(&filter, args.sort);
            if session.json {
                return emit_json(&page.rows);
            }
            if !print_page_header(&page, &filter, args.sort) {
                return Ok(());
            }

            let displayed = args
                .live
                .then(|| LiveScoreJitter::default().displayed(leads, &mut session.display_rng()));
            for lead in &page.rows {
                let (emergency, quality) = displayed
                    .as_ref()
                    .and_then(|scores| scores.get(&lead.id))
                    .map(|shown| (shown.emergency, shown.quality))
                    .unwrap_or((lead.emergency_level, lead.quality_score));
                println!(
                    "- [{}] {} | {} | {} | emergency {}/10, quality {}/10 | {} {} | captured {}{} | {}",
                    lead.status.label(),
                    lead.name,
                    lead.address,
                    lead.source.label(),
                    emergency,
                    quality,
                    lead.job_type.label(),
                    dollars(f64::from(lead.estimated_job_value)),
                    format_datetime(lead.captured_at, CAPTURE_PATTERN),
                    if lead.is_after_hours { " (after hours)" } else { "" },
                    relative_age(&lead.created_at.to_rfc3339(), session.now),
                );
            }
        }
        Dataset::Crm(leads) => {
            let filter: LeadFilter<CrmStatus> = inbox_filter(args)?;
            if args.csv {
                return export_csv(leads, &filter, args.sort);
            }
            let page = Inbox::new(leads).with_limit(limit).page(&filter, args.sort);
            if session.json {
                return emit_json(&page.rows);
            }
            if !print_page_header(&page, &filter, args.sort) {
                return Ok(());
            }

            for lead in &page.rows {
                println!(
                    "- [{}] {} ({}) | {} | score {} ({}) | {} | owner {} | {}",
                    lead.status.label(),
                    lead.name,
                    lead.company,
                    lead.source.label(),
                    lead.score,
                    lead.priority.label(),
                    dollars(f64::from(lead.estimated_value)),
                    lead.assigned_to,
                    relative_age(&lead.created_at.to_rfc3339(), session.now),
                );
            }
        }
    }

    Ok(())
}

pub(crate) fn print_scored(ranked: &[ScoredLead<'_>]) {
    for (position, entry) in ranked.iter().enumerate() {
        println!(
            "{}. {} ({}) - {} priority {}, readiness {}/10{}",
            position + 1,
            entry.lead.name,
            entry.lead.id,
            entry.score.tier.label(),
            entry.score.priority_score,
            entry.score.readiness_score,
            if entry.score.high_value_emergency {
                ", high-value emergency"
            } else {
                ""
            },
        );
        let factors = &entry.score.factors;
        if factors.total() == 0 {
            continue;
        }
        let indicators: Vec<&str> = factors
            .emergency
            .iter()
            .chain(&factors.quality)
            .chain(&factors.readiness)
            .chain(&factors.value)
            .map(|indicator| indicator.label())
            .collect();
        println!("   {} factors: {}", factors.total(), indicators.join("; "));
    }
}

pub(crate) fn scoring(session: &Session, args: &ScoringArgs) -> Result<(), AppError> {
    let limit = args.limit.unwrap_or(session.profile.scoring_limit);

    match &session.dataset {
        Dataset::Roofing(leads) => {
            let ranked = ScoringEngine::default().rank(leads, limit);
            if session.json {
                return emit_json(&ranked);
            }
            println!("Top {} leads by priority score", ranked.len());
            print_scored(&ranked);
        }
        Dataset::Crm(leads) => {
            let top = Inbox::new(leads)
                .with_limit(limit)
                .page(&LeadFilter::default(), SortKey::Priority);
            if session.json {
                return emit_json(&top.rows);
            }
            println!("Top {} leads by lead score", top.rows.len());
            for (position, lead) in top.rows.iter().enumerate() {
                println!(
                    "{}. {} ({}) - score {}, {} priority",
                    position + 1,
                    lead.name,
                    lead.company,
                    lead.score,
                    lead.priority.label()
                );
            }
        }
    }

    Ok(())
}

fn aggregate<L: LeadRecord>(session: &Session, leads: &[L]) -> AnalyticsReport<L::Status> {
    AnalyticsAggregator::new(session.profile.granularity, session.profile.period_count)
        .aggregate(leads, session.now)
}

pub(crate) fn print_report<S: PipelineStatus>(report: &AnalyticsReport<S>) {
    let header = &report.header;
    println!(
        "Leads: {} total, {} urgent, {} new, {} converted ({} realized)",
        header.total_leads,
        header.urgent_leads,
        header.new_leads,
        header.converted_leads,
        dollars(header.realized_revenue as f64)
    );

    println!("\nLead sources");
    for entry in report.by_source.iter() {
        println!("- {}: {} ({:.1}%)", entry.label, entry.count, entry.percentage);
    }
    println!("\nCapture window");
    for entry in report.by_capture_window.iter() {
        println!("- {}: {} ({:.1}%)", entry.label, entry.count, entry.percentage);
    }

    println!("\nStatus");
    for entry in &report.by_status {
        println!("- {}: {}", entry.label, entry.count);
    }

    println!("\nConversion funnel");
    for stage in &report.funnel {
        println!("- {}: {} ({}%)", stage.stage, stage.count, stage.percentage);
    }

    let times = &report.response_times;
    println!(
        "\nResponse time: {:.0} min average ({:.0} emergency, {:.0} standard, {} responded)",
        times.avg_response_time,
        times.emergency_response_time,
        times.standard_response_time,
        times.responded
    );

    println!("\nPeriods");
    for bucket in &report.periods {
        println!(
            "- {}: {} leads, {} emergency jobs, {} standard jobs, {}",
            bucket.label,
            bucket.leads,
            bucket.emergency_jobs,
            bucket.standard_jobs,
            dollars(bucket.revenue as f64)
        );
    }

    let revenue = &report.revenue;
    println!(
        "\nRevenue: {} pipeline, {} realized, {:.1}% conversion, {} average deal",
        dollars(revenue.estimated_pipeline as f64),
        dollars(revenue.realized as f64),
        revenue.conversion_rate,
        dollars(revenue.average_deal_size)
    );
    for source in &revenue.by_source {
        println!(
            "- {}: {} of {} converted, {}",
            source.label,
            source.converted,
            source.leads,
            dollars(source.revenue as f64)
        );
    }
}

pub(crate) fn analytics(session: &Session) -> Result<(), AppError> {
    match &session.dataset {
        Dataset::Roofing(leads) => {
            let report = aggregate(session, leads);
            if session.json {
                return emit_json(&report);
            }
            print_report(&report);
        }
        Dataset::Crm(leads) => {
            let report = aggregate(session, leads);
            if session.json {
                return emit_json(&report);
            }
            print_report(&report);
        }
    }
    Ok(())
}

#[derive(Serialize)]
pub(crate) struct TeamView<'a, S: PipelineStatus> {
    pub(crate) summary: RosterSummary,
    pub(crate) members: &'a [TeamMember],
    pub(crate) workloads: Vec<TeamWorkload<S>>,
}

pub(crate) fn team_view<'a, L: LeadRecord>(
    roster: &'a [TeamMember],
    leads: &[L],
) -> TeamView<'a, L::Status> {
    TeamView {
        summary: RosterSummary::from_roster(roster),
        members: roster,
        workloads: TeamWorkload::collect(roster, leads),
    }
}

pub(crate) fn print_team<S: PipelineStatus>(view: &TeamView<'_, S>) {
    println!(
        "Team: {} members, {} leads handled, {:.1}% average conversion",
        view.summary.members, view.summary.total_leads, view.summary.average_conversion_rate
    );
    for (member, workload) in view.members.iter().zip(&view.workloads) {
        println!(
            "- {} [{}] {}: {} assigned now, {} pipeline, {} realized, {} per lead",
            member.name,
            member.avatar,
            member.role,
            workload.assigned,
            dollars(workload.pipeline_value as f64),
            dollars(workload.realized_revenue as f64),
            dollars(workload.revenue_per_lead as f64),
        );
        if let Some(field) = member.field {
            println!(
                "   {} emergency leads, {} min average response, {} generated",
                field.emergency_leads_count,
                field.avg_response_time,
                dollars(f64::from(field.revenue_generated))
            );
        }
    }
}

pub(crate) fn team(session: &Session) -> Result<(), AppError> {
    match &session.dataset {
        Dataset::Roofing(leads) => {
            let view = team_view(&session.roster, leads);
            if session.json {
                return emit_json(&view);
            }
            print_team(&view);
        }
        Dataset::Crm(leads) => {
            let view = team_view(&session.roster, leads);
            if session.json {
                return emit_json(&view);
            }
            print_team(&view);
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub(crate) struct RoiView {
    pub(crate) inputs: RoiInputs,
    pub(crate) result: RoiResult,
    pub(crate) projection: Vec<ProjectionMonth>,
}

pub(crate) fn roi_view(session: &Session, args: &RoiArgs) -> RoiView {
    let defaults = session.profile.roi_defaults;
    let base = if args.observed {
        match &session.dataset {
            Dataset::Roofing(leads) => RoiInputs::observed(leads, defaults.fixed_monthly_cost),
            Dataset::Crm(leads) => RoiInputs::observed(leads, defaults.fixed_monthly_cost),
        }
    } else {
        defaults
    };

    let field = |raw: &Option<String>, fallback: f64| raw.as_deref().map_or(fallback, parse_input);
    let inputs = RoiInputs::sanitized(
        field(&args.leads, f64::from(base.leads_per_month)),
        field(&args.job_value, base.avg_job_value),
        field(&args.conversion_rate, base.conversion_rate_percent),
        field(&args.cost, base.fixed_monthly_cost),
    );
    let result = inputs.compute();
    let months = args.months.unwrap_or(session.profile.projection_months);

    RoiView {
        inputs,
        result,
        projection: result.projection(months),
    }
}

pub(crate) fn print_roi(view: &RoiView) {
    let RoiView {
        inputs,
        result,
        projection,
    } = view;
    println!(
        "Inputs: {} leads/month, {} average job, {:.1}% conversion, {} monthly cost",
        inputs.leads_per_month,
        dollars(inputs.avg_job_value),
        inputs.conversion_rate_percent,
        dollars(inputs.fixed_monthly_cost)
    );
    println!(
        "Jobs converted: {} | revenue {} | net profit {} | ROI {:.0}% ({:.1}x)",
        result.jobs_converted,
        dollars(result.monthly_revenue),
        dollars(result.net_profit),
        result.roi_percent,
        result.return_multiple
    );
    println!(
        "Cost per lead {:.2} | revenue per lead {:.2} | payback {:.2} months | LTV:CAC {:.1}:1",
        result.cost_per_lead,
        result.revenue_per_lead,
        result.payback_period_months,
        result.unit_economics.ltv_cac_ratio
    );

    println!("\nProjection");
    for month in projection {
        println!(
            "- Month {}: invested {}, revenue {}, profit {}, ROI {:.1}%",
            month.month,
            dollars(month.investment),
            dollars(month.revenue),
            dollars(month.profit),
            month.roi_percent
        );
    }
}

pub(crate) fn roi(session: &Session, args: &RoiArgs) -> Result<(), AppError> {
    let view = roi_view(session, args);
    if session.json {
        return emit_json(&view);
    }
    print_roi(&view);
    Ok(())
}
