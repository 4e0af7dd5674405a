use crate::cli::GlobalArgs;
use chrono::{DateTime, Utc};
use leadboard::config::AppConfig;
use leadboard::error::AppError;
use leadboard::leads::display::parse_timestamp;
use leadboard::leads::generator::{generate_crm_leads, generate_roofing_leads, seeded_rng};
use leadboard::leads::roster::{roofing_crew, sales_team};
use leadboard::leads::{CrmLead, DashboardProfile, RoofingLead, TeamMember, Variant};
use leadboard::telemetry;
use rand::rngs::StdRng;
use tracing::info;

pub(crate) fn parse_reference_time(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(raw)
        .ok_or_else(|| format!("failed to parse '{raw}' as RFC 3339 or YYYY-MM-DD"))
}

/// Generated leads for the active variant.
pub(crate) enum Dataset {
    Roofing(Vec<RoofingLead>),
    Crm(Vec<CrmLead>),
}

impl Dataset {
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Roofing(leads) => leads.len(),
            Self::Crm(leads) => leads.len(),
        }
    }
}

/// Everything a command needs: resolved settings plus the generated dataset.
pub(crate) struct Session {
    pub(crate) profile: DashboardProfile,
    pub(crate) roster: Vec<TeamMember>,
    pub(crate) dataset: Dataset,
    pub(crate) now: DateTime<Utc>,
    pub(crate) seed: Option<u64>,
    pub(crate) json: bool,
}

impl Session {
    pub(crate) fn start(args: &GlobalArgs) -> Result<Self, AppError> {
        let config = AppConfig::load()?;
        telemetry::init(&config.telemetry)?;

        let variant = args.variant.unwrap_or(config.dashboard.variant);
        let seed = args.seed.or(config.dashboard.seed);
        let now = args.now.unwrap_or_else(Utc::now);

        let mut profile = variant.profile();
        profile.generator = config.dashboard.generator(&profile.generator);
        if let Some(count) = args.count {
            profile.generator.lead_count = count;
        }

        let mut rng = seeded_rng(seed);
        let (roster, dataset) = match variant {
            Variant::Roofing => {
                let roster = roofing_crew();
                let leads = generate_roofing_leads(&profile.generator, &roster, now, &mut rng);
                (roster, Dataset::Roofing(leads))
            }
            Variant::SalesCrm => {
                let roster = sales_team();
                let leads = generate_crm_leads(&profile.generator, &roster, now, &mut rng);
                (roster, Dataset::Crm(leads))
            }
        };

        info!(
            environment = ?config.environment,
            variant = %variant,
            seed = ?seed,
            leads = dataset.len(),
            "dataset ready"
        );

        Ok(Self {
            profile,
            roster,
            dataset,
            now,
            seed,
            json: args.json,
        })
    }

    /// Separate stream for presentation-only randomness so the dataset stays reproducible.
    pub(crate) fn display_rng(&self) -> StdRng {
        seeded_rng(self.seed.map(|seed| seed.wrapping_add(1)))
    }
}
