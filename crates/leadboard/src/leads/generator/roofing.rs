use super::super::domain::{
    is_after_hours, JobType, LeadId, LeadSource, MemberId, Rating, RoofingLead, RoofingStatus,
    TeamMember,
};
use super::vocabulary::{ADDRESSES, EMERGENCY_MESSAGES, HOMEOWNER_NAMES, STANDARD_MESSAGES};
use super::{chance, email_for, pick, GeneratorConfig};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::Rng;
use tracing::debug;

/// Generates roofing leads sorted in inbox priority order.
pub fn generate_roofing_leads<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    roster: &[TeamMember],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<RoofingLead> {
    let mut leads: Vec<RoofingLead> = (0..config.lead_count)
        .map(|index| roofing_lead(index, config, roster, now, rng))
        .collect();

    leads.sort_by(RoofingLead::priority_cmp);

    debug!(
        count = leads.len(),
        emergencies = leads.iter().filter(|lead| lead.is_emergency()).count(),
        "generated roofing leads"
    );
    leads
}

fn roofing_lead<R: Rng + ?Sized>(
    index: usize,
    config: &GeneratorConfig,
    roster: &[TeamMember],
    now: DateTime<Utc>,
    rng: &mut R,
) -> RoofingLead {
    let days_ago = i64::from(rng.random_range(0..config.lookback_days.max(1)));
    let created_at = now - Duration::days(days_ago);

    let emergency = chance(rng, config.emergency_rate);
    let emergency_level = if emergency {
        Rating::saturating(rng.random_range(6..=10))
    } else {
        Rating::saturating(rng.random_range(1..=5))
    };
    let quality_score = Rating::saturating(rng.random_range(7..=10));

    let hour = if chance(rng, config.after_hours_rate) {
        if rng.random_bool(0.5) {
            rng.random_range(0..7)
        } else {
            rng.random_range(19..24)
        }
    } else {
        rng.random_range(7..19)
    };
    let minute = rng.random_range(0..60);
    let captured_at = created_at
        .date_naive()
        .and_hms_opt(hour, minute, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or(created_at);

    let source = if chance(rng, config.chatbot_share) {
        LeadSource::Chatbot
    } else {
        LeadSource::Phone
    };
    let name = pick(rng, HOMEOWNER_NAMES);
    let address = pick(rng, ADDRESSES);

    let (job_type, estimated_job_value) = job_for(emergency, rng);
    let status = status_for(days_ago, emergency, rng);

    let responded = !status.awaiting_response();
    let response_time = responded.then(|| {
        if emergency {
            rng.random_range(15..45)
        } else {
            rng.random_range(60..300)
        }
    });
    let assigned_to = if responded && !roster.is_empty() {
        Some(roster[rng.random_range(0..roster.len())].id.clone())
    } else {
        None::<MemberId>
    };

    let (actual_job_value, converted_at) = if status == RoofingStatus::Converted {
        let factor = 0.85 + rng.random::<f64>() * 0.3;
        let days_to_close = rng.random_range(1..=5);
        (
            Some(actual_value(estimated_job_value, factor)),
            Some(created_at + Duration::days(days_to_close)),
        )
    } else {
        (None, None)
    };

    let notes = if emergency {
        pick(rng, EMERGENCY_MESSAGES)
    } else {
        pick(rng, STANDARD_MESSAGES)
    };
    let phone = format!(
        "({}) {}-{}",
        rng.random_range(100..1000),
        rng.random_range(100..1000),
        rng.random_range(1000..10000)
    );

    RoofingLead {
        id: LeadId(format!("roofing-lead-{}", index + 1)),
        name: name.to_string(),
        address: address.to_string(),
        phone,
        email: email_for(name, "email.com"),
        source,
        status,
        emergency_level,
        quality_score,
        created_at,
        captured_at,
        is_after_hours: is_after_hours(captured_at),
        estimated_job_value,
        job_type,
        notes: notes.to_string(),
        assigned_to,
        response_time,
        converted_at,
        actual_job_value,
    }
}

fn job_for<R: Rng + ?Sized>(emergency: bool, rng: &mut R) -> (JobType, u32) {
    if emergency {
        (JobType::Emergency, rng.random_range(800..1600))
    } else if rng.random_bool(0.3) {
        (JobType::Inspection, rng.random_range(200..400))
    } else if rng.random_bool(0.5) {
        (JobType::Quote, 0)
    } else {
        (JobType::Standard, rng.random_range(600..1600))
    }
}

fn status_for<R: Rng + ?Sized>(days_ago: i64, emergency: bool, rng: &mut R) -> RoofingStatus {
    if days_ago < 1 && emergency {
        RoofingStatus::Emergency
    } else if days_ago < 2 {
        RoofingStatus::New
    } else if days_ago < 5 && rng.random_bool(0.7) {
        RoofingStatus::Contacted
    } else if days_ago < 10 && rng.random_bool(0.5) {
        RoofingStatus::Scheduled
    } else if rng.random_bool(0.4) {
        RoofingStatus::Converted
    } else if days_ago < 3 {
        RoofingStatus::New
    } else {
        RoofingStatus::Contacted
    }
}

/// Scales the estimate and keeps the result inside the 85%-115% band.
fn actual_value(estimate: u32, factor: f64) -> u32 {
    let estimate = f64::from(estimate);
    let low = (estimate * 0.85).ceil();
    let high = (estimate * 1.15).floor();
    (estimate * factor).floor().clamp(low, high) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actual_value_stays_inside_band() {
        for estimate in [0, 1, 7, 801, 1599] {
            for factor in [0.85, 0.9999, 1.0, 1.1499] {
                let actual = f64::from(actual_value(estimate, factor));
                assert!(actual >= f64::from(estimate) * 0.85);
                assert!(actual <= f64::from(estimate) * 1.15);
            }
        }
    }
}
