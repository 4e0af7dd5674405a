//! Return-on-investment model for the lead capture service.

use super::analytics::percent_of;
use super::record::LeadRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub leads_per_month: u32,
    pub avg_job_value: f64,
    pub conversion_rate_percent: f64,
    pub fixed_monthly_cost: f64,
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Parses a raw form value; anything unparseable is treated as zero.
pub fn parse_input(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

impl RoiInputs {
    /// Builds inputs from untrusted numbers. Negatives and non-finite values become zero
    /// and the conversion rate is capped at 100.
    pub fn sanitized(
        leads_per_month: f64,
        avg_job_value: f64,
        conversion_rate_percent: f64,
        fixed_monthly_cost: f64,
    ) -> Self {
        let leads = non_negative(leads_per_month).round();
        Self {
            leads_per_month: if leads >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                leads as u32
            },
            avg_job_value: non_negative(avg_job_value),
            conversion_rate_percent: non_negative(conversion_rate_percent).min(100.0),
            fixed_monthly_cost: non_negative(fixed_monthly_cost),
        }
    }

    /// Same as [`RoiInputs::sanitized`] but from raw text fields.
    pub fn from_raw(leads: &str, job_value: &str, conversion_rate: &str, cost: &str) -> Self {
        Self::sanitized(
            parse_input(leads),
            parse_input(job_value),
            parse_input(conversion_rate),
            parse_input(cost),
        )
    }

    /// Calibrates inputs against an observed lead collection: volume, conversion rate
    /// and average realized value.
    pub fn observed<L: LeadRecord>(leads: &[L], fixed_monthly_cost: f64) -> Self {
        let realized: Vec<f64> = leads
            .iter()
            .filter_map(|lead| lead.realized_value())
            .map(f64::from)
            .collect();
        let avg_job_value = if realized.is_empty() {
            0.0
        } else {
            realized.iter().sum::<f64>() / realized.len() as f64
        };

        Self::sanitized(
            leads.len() as f64,
            avg_job_value,
            percent_of(realized.len(), leads.len()),
            fixed_monthly_cost,
        )
    }

    pub fn compute(&self) -> RoiResult {
        let leads = f64::from(self.leads_per_month);
        let jobs_converted = (leads * self.conversion_rate_percent / 100.0).round();
        let monthly_revenue = jobs_converted * self.avg_job_value;
        let net_profit = monthly_revenue - self.fixed_monthly_cost;
        // Without lead volume there is nothing to return on.
        let roi_percent = if self.leads_per_month == 0 {
            0.0
        } else {
            ratio(net_profit, self.fixed_monthly_cost) * 100.0
        };

        RoiResult {
            jobs_converted: jobs_converted as u32,
            monthly_revenue,
            monthly_cost: self.fixed_monthly_cost,
            net_profit,
            roi_percent,
            cost_per_lead: ratio(self.fixed_monthly_cost, leads),
            revenue_per_lead: ratio(monthly_revenue, leads),
            payback_period_months: ratio(self.fixed_monthly_cost, monthly_revenue),
            return_multiple: roi_percent / 100.0 + 1.0,
            unit_economics: UnitEconomics::new(
                self.avg_job_value,
                ratio(self.fixed_monthly_cost, leads),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitEconomics {
    pub lifetime_value: f64,
    pub acquisition_cost: f64,
    pub ltv_cac_ratio: f64,
}

impl UnitEconomics {
    pub fn new(lifetime_value: f64, acquisition_cost: f64) -> Self {
        Self {
            lifetime_value,
            acquisition_cost,
            ltv_cac_ratio: ratio(lifetime_value, acquisition_cost),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiResult {
    pub jobs_converted: u32,
    pub monthly_revenue: f64,
    pub monthly_cost: f64,
    pub net_profit: f64,
    pub roi_percent: f64,
    pub cost_per_lead: f64,
    pub revenue_per_lead: f64,
    pub payback_period_months: f64,
    /// Dollars returned per dollar spent.
    pub return_multiple: f64,
    pub unit_economics: UnitEconomics,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionMonth {
    pub month: u32,
    pub investment: f64,
    pub revenue: f64,
    pub profit: f64,
    pub roi_percent: f64,
}

impl RoiResult {
    /// Cumulative totals for months `1..=months`.
    pub fn projection(&self, months: u32) -> Vec<ProjectionMonth> {
        (1..=months)
            .map(|month| {
                let investment = self.monthly_cost * f64::from(month);
                let revenue = self.monthly_revenue * f64::from(month);
                let profit = revenue - investment;
                ProjectionMonth {
                    month,
                    investment,
                    revenue,
                    profit,
                    roi_percent: ratio(profit, investment) * 100.0,
                }
            })
            .collect()
    }
}
