use crate::cli::RoiArgs;
use crate::infra::{Dataset, Session};
use crate::render::{
    dollars, emit_json, print_report, print_roi, print_scored, print_team, roi_view, team_view,
    RoiView, TeamView,
};
use leadboard::error::AppError;
use leadboard::leads::analytics::views::AnalyticsReport;
use leadboard::leads::scoring::LeadScore;
use leadboard::leads::{
    AnalyticsAggregator, Inbox, LeadFilter, LeadRecord, PipelineStatus, ScoringEngine, SortKey,
    Variant,
};
use serde::Serialize;

const DEMO_INBOX_ROWS: usize = 5;

#[derive(Serialize)]
struct DemoSnapshot<'a, L, S: PipelineStatus> {
    title: &'static str,
    variant: Variant,
    analytics: AnalyticsReport<S>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    scoring: Vec<LeadScore>,
    inbox: Vec<&'a L>,
    team: TeamView<'a, S>,
    roi: RoiView,
}

fn snapshot<'a, L>(
    session: &'a Session,
    leads: &'a [L],
    scoring: Vec<LeadScore>,
) -> DemoSnapshot<'a, L, L::Status>
where
    L: LeadRecord,
{
    let analytics =
        AnalyticsAggregator::new(session.profile.granularity, session.profile.period_count)
            .aggregate(leads, session.now);
    let inbox = Inbox::new(leads)
        .with_limit(DEMO_INBOX_ROWS)
        .page(&LeadFilter::default(), SortKey::Priority)
        .rows;

    DemoSnapshot {
        title: session.profile.title,
        variant: session.profile.variant,
        analytics,
        scoring,
        inbox,
        team: team_view(&session.roster, leads),
        roi: roi_view(session, &RoiArgs::default()),
    }
}

fn print_snapshot<L, S>(snapshot: &DemoSnapshot<'_, L, S>, describe: impl Fn(&L) -> String)
where
    L: LeadRecord,
    S: PipelineStatus,
{
    println!("{} ({} variant)", snapshot.title, snapshot.variant);

    println!("\n== Analytics ==");
    print_report(&snapshot.analytics);

    println!("\n== Inbox (top {}) ==", snapshot.inbox.len());
    for lead in &snapshot.inbox {
        println!("- {}", describe(lead));
    }

    println!("\n== Team ==");
    print_team(&snapshot.team);

    println!("\n== ROI ==");
    print_roi(&snapshot.roi);
}

pub(crate) fn run_demo(session: &Session) -> Result<(), AppError> {
    match &session.dataset {
        Dataset::Roofing(leads) => {
            let engine = ScoringEngine::default();
            let ranked = engine.rank(leads, session.profile.scoring_limit);
            let scores = ranked.iter().map(|entry| entry.score.clone()).collect();
            let demo = snapshot(session, leads, scores);
            if session.json {
                return emit_json(&demo);
            }

            print_snapshot(&demo, |lead| {
                format!(
                    "[{}] {} | emergency {}/10 | {}",
                    lead.status.label(),
                    lead.name,
                    lead.emergency_level,
                    dollars(f64::from(lead.estimated_job_value))
                )
            });
            println!("\n== Lead scoring ==");
            print_scored(&ranked);
        }
        Dataset::Crm(leads) => {
            let demo = snapshot(session, leads, Vec::new());
            if session.json {
                return emit_json(&demo);
            }

            print_snapshot(&demo, |lead| {
                format!(
                    "[{}] {} ({}) | score {} | {}",
                    lead.status.label(),
                    lead.name,
                    lead.company,
                    lead.score,
                    dollars(f64::from(lead.estimated_value))
                )
            });
        }
    }

    Ok(())
}
