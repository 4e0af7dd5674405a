use super::super::record::LeadRecord;
use super::views::PeriodBucket;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodGranularity {
    /// Seven-day windows ending at the reference time, labelled `Week 1..N`.
    Weekly,
    /// Calendar months ending with the reference month, labelled by month name.
    Monthly,
}

impl PeriodGranularity {
    /// Smallest number of periods ending at the reference time that holds every lead
    /// created in the last `days` days.
    pub fn periods_covering(self, days: u32) -> usize {
        let days = days.max(1) as usize;
        match self {
            Self::Weekly => days.div_ceil(7),
            // A window can straddle one more calendar month than it spans.
            Self::Monthly => days.div_ceil(28) + 1,
        }
    }
}

/// Buckets leads by creation time, oldest period first. Leads outside the window are skipped.
pub(crate) fn breakdown<L: LeadRecord>(
    leads: &[L],
    granularity: PeriodGranularity,
    periods: usize,
    now: DateTime<Utc>,
) -> Vec<PeriodBucket> {
    let mut buckets: Vec<PeriodBucket> = (0..periods)
        .map(|index| PeriodBucket {
            label: label_for(granularity, periods, index, now),
            leads: 0,
            emergency_jobs: 0,
            standard_jobs: 0,
            revenue: 0,
        })
        .collect();

    for lead in leads {
        let Some(index) = bucket_index(granularity, periods, lead.created_at(), now) else {
            continue;
        };
        let bucket = &mut buckets[index];
        bucket.leads += 1;
        if let Some(revenue) = lead.realized_value() {
            if lead.is_emergency_job() {
                bucket.emergency_jobs += 1;
            } else {
                bucket.standard_jobs += 1;
            }
            bucket.revenue += u64::from(revenue);
        }
    }

    buckets
}

fn month_index(at: DateTime<Utc>) -> i64 {
    i64::from(at.year()) * 12 + i64::from(at.month0())
}

fn bucket_index(
    granularity: PeriodGranularity,
    periods: usize,
    at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<usize> {
    let periods = i64::try_from(periods).ok()?;
    let periods_back = match granularity {
        PeriodGranularity::Weekly => {
            let elapsed = now.signed_duration_since(at);
            if elapsed < chrono::Duration::zero() {
                return None;
            }
            elapsed.num_days() / 7
        }
        PeriodGranularity::Monthly => month_index(now) - month_index(at),
    };

    if (0..periods).contains(&periods_back) {
        usize::try_from(periods - 1 - periods_back).ok()
    } else {
        None
    }
}

fn label_for(
    granularity: PeriodGranularity,
    periods: usize,
    index: usize,
    now: DateTime<Utc>,
) -> String {
    match granularity {
        PeriodGranularity::Weekly => format!("Week {}", index + 1),
        PeriodGranularity::Monthly => {
            let target = month_index(now) - (periods - 1 - index) as i64;
            let year = target.div_euclid(12) as i32;
            let month = target.rem_euclid(12) as u32 + 1;
            NaiveDate::from_ymd_opt(year, month, 1)
                .map(|date| date.format("%b %Y").to_string())
                .unwrap_or_else(|| format!("Month {}", index + 1))
        }
    }
}
