use crate::demo::run_demo;
use crate::infra::{parse_reference_time, Session};
use crate::render;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use leadboard::error::AppError;
use leadboard::leads::{SortKey, SourceFilter, Variant};

#[derive(Parser, Debug)]
#[command(
    name = "leadboard",
    about = "Explore synthetic lead pipelines for the roofing and sales dashboards",
    version
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct GlobalArgs {
    /// Dashboard variant (roofing or crm). Overrides LEADBOARD_VARIANT.
    #[arg(long, global = true)]
    pub(crate) variant: Option<Variant>,
    /// Seed for reproducible datasets. Overrides LEADBOARD_SEED.
    #[arg(long, global = true)]
    pub(crate) seed: Option<u64>,
    /// Number of leads to generate. Overrides LEADBOARD_LEAD_COUNT.
    #[arg(long, global = true)]
    pub(crate) count: Option<usize>,
    /// Reference time (RFC 3339 or YYYY-MM-DD). Defaults to now.
    #[arg(long, global = true, value_parser = parse_reference_time)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub(crate) json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List leads with source/status filters and a sort order
    Inbox(InboxArgs),
    /// Rank roofing leads by readiness and priority
    Scoring(ScoringArgs),
    /// Show shares, funnel, response times, periods and revenue
    Analytics,
    /// Show team roster and per-member workload
    Team,
    /// Compute ROI and a cumulative projection
    Roi(RoiArgs),
    /// Walk through every dashboard view (default command)
    Demo,
}

#[derive(Args, Debug)]
pub(crate) struct InboxArgs {
    /// Lead source filter: all, chatbot or phone
    #[arg(long, default_value = "all")]
    pub(crate) source: SourceFilter,
    /// Status filter: all or one of the variant's statuses
    #[arg(long, default_value = "all")]
    pub(crate) status: String,
    /// Sort order: priority, date or value
    #[arg(long, default_value = "priority")]
    pub(crate) sort: SortKey,
    /// Maximum rows to display
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Write matching rows as CSV to stdout
    #[arg(long)]
    pub(crate) csv: bool,
    /// Show live-jittered emergency and quality ratings (roofing only)
    #[arg(long)]
    pub(crate) live: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoringArgs {
    /// Number of leads to rank
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RoiArgs {
    /// Leads per month
    #[arg(long)]
    pub(crate) leads: Option<String>,
    /// Average job value in dollars
    #[arg(long)]
    pub(crate) job_value: Option<String>,
    /// Conversion rate in percent
    #[arg(long)]
    pub(crate) conversion_rate: Option<String>,
    /// Fixed monthly cost in dollars
    #[arg(long)]
    pub(crate) cost: Option<String>,
    /// Months in the cumulative projection
    #[arg(long)]
    pub(crate) months: Option<u32>,
    /// Calibrate leads, conversion rate and job value from the generated dataset
    #[arg(long)]
    pub(crate) observed: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let session = Session::start(&cli.global)?;

    match cli.command.unwrap_or(Command::Demo) {
        Command::Inbox(args) => render::inbox(&session, &args),
        Command::Scoring(args) => render::scoring(&session, &args),
        Command::Analytics => render::analytics(&session),
        Command::Team => render::team(&session),
        Command::Roi(args) => render::roi(&session, &args),
        Command::Demo => run_demo(&session),
    }
}
