use super::analytics::PeriodGranularity;
use super::domain::ParseValueError;
use super::generator::GeneratorConfig;
use super::inbox::DEFAULT_PAGE_LIMIT;
use super::roi::RoiInputs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Roofing,
    SalesCrm,
}

impl Variant {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Roofing => "roofing",
            Self::SalesCrm => "crm",
        }
    }

    pub fn profile(self) -> DashboardProfile {
        match self {
            Self::Roofing => DashboardProfile::roofing(),
            Self::SalesCrm => DashboardProfile::sales_crm(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variant {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "roofing" => Ok(Self::Roofing),
            "crm" | "sales" | "sales_crm" => Ok(Self::SalesCrm),
            _ => Err(ParseValueError::Unknown {
                kind: "variant",
                value: s.to_string(),
                expected: "roofing, crm",
            }),
        }
    }
}

/// Per-variant presentation parameters handed to the aggregators and calculators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardProfile {
    pub variant: Variant,
    pub title: &'static str,
    pub generator: GeneratorConfig,
    pub projection_months: u32,
    pub granularity: PeriodGranularity,
    pub period_count: usize,
    pub inbox_limit: usize,
    pub scoring_limit: usize,
    pub roi_defaults: RoiInputs,
}

impl DashboardProfile {
    pub fn roofing() -> Self {
        let generator = GeneratorConfig::roofing();
        Self {
            variant: Variant::Roofing,
            title: "Roofing Lead Command Center",
            period_count: PeriodGranularity::Weekly.periods_covering(generator.lookback_days),
            generator,
            projection_months: 6,
            granularity: PeriodGranularity::Weekly,
            inbox_limit: DEFAULT_PAGE_LIMIT,
            scoring_limit: 20,
            roi_defaults: RoiInputs {
                leads_per_month: 52,
                avg_job_value: 900.0,
                conversion_rate_percent: 19.0,
                fixed_monthly_cost: 697.0,
            },
        }
    }

    pub fn sales_crm() -> Self {
        let generator = GeneratorConfig::sales_crm();
        Self {
            variant: Variant::SalesCrm,
            title: "Sales Lead Dashboard",
            period_count: PeriodGranularity::Monthly
                .periods_covering(generator.lookback_days)
                .max(6),
            generator,
            projection_months: 12,
            granularity: PeriodGranularity::Monthly,
            inbox_limit: DEFAULT_PAGE_LIMIT,
            scoring_limit: 20,
            roi_defaults: RoiInputs {
                leads_per_month: 150,
                avg_job_value: 12_500.0,
                conversion_rate_percent: 24.0,
                fixed_monthly_cost: 15_000.0,
            },
        }
    }

    pub fn lead_count(&self) -> usize {
        self.generator.lead_count
    }
}
