use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::leads::domain::{
    CrmLead, CrmStatus, JobType, LeadId, LeadPriority, LeadSource, MemberId, Rating, RoofingLead,
    RoofingStatus,
};

/// Fixed reference time: Wednesday 2025-03-12 14:30 UTC.
pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 12, 14, 30, 0)
        .single()
        .expect("valid reference time")
}

pub(super) fn rating(value: u8) -> Rating {
    Rating::new(value).expect("rating in range")
}

pub(super) fn roofing_lead(id: &str, status: RoofingStatus) -> RoofingLead {
    let created_at = now() - Duration::days(1);
    RoofingLead {
        id: LeadId(id.to_string()),
        name: "Jennifer Walsh".to_string(),
        address: "1847 Oak Ridge Dr, Plano, TX".to_string(),
        phone: "(214) 555-0147".to_string(),
        email: "jennifer.walsh@email.com".to_string(),
        source: LeadSource::Chatbot,
        status,
        emergency_level: rating(3),
        quality_score: rating(7),
        created_at,
        captured_at: created_at,
        is_after_hours: false,
        estimated_job_value: 900,
        job_type: JobType::Standard,
        notes: "Looking for a quote on shingle replacement".to_string(),
        assigned_to: None,
        response_time: None,
        converted_at: None,
        actual_job_value: None,
    }
}

pub(super) fn converted_lead(id: &str, estimate: u32, actual: Option<u32>) -> RoofingLead {
    RoofingLead {
        estimated_job_value: estimate,
        actual_job_value: actual,
        response_time: Some(120),
        assigned_to: Some(MemberId("team-1".to_string())),
        ..roofing_lead(id, RoofingStatus::Converted)
    }
}

pub(super) fn crm_lead(id: &str, status: CrmStatus, score: u8, value: u32) -> CrmLead {
    CrmLead {
        id: LeadId(id.to_string()),
        name: "Sarah Johnson".to_string(),
        company: "TechCorp Solutions".to_string(),
        email: "sarah.johnson@techcorp.com".to_string(),
        phone: "(555) 123-4567".to_string(),
        source: LeadSource::Phone,
        score,
        status,
        assigned_to: MemberId("team-1".to_string()),
        created_at: now() - Duration::days(3),
        estimated_value: value,
        priority: LeadPriority::from_score(score),
    }
}
