use super::analytics::views::StatusCount;
use super::domain::{FieldStats, MemberId, TeamMember};
use super::record::{LeadRecord, PipelineStatus};
use serde::Serialize;

/// Roofing crew fixture with field statistics.
pub fn roofing_crew() -> Vec<TeamMember> {
    vec![
        crew_member("team-1", "Mike Rodriguez", "Lead Estimator", "MR", 11, 73, (4, 28, 12_400)),
        crew_member("team-2", "Amanda Foster", "Sales Manager", "AF", 9, 78, (3, 22, 9_800)),
        crew_member("team-3", "Tom Wilson", "Estimator", "TW", 7, 71, (2, 35, 7_200)),
        crew_member("team-4", "Jessica Martinez", "Sales Rep", "JM", 5, 60, (1, 42, 4_800)),
    ]
}

/// Generic sales team fixture.
pub fn sales_team() -> Vec<TeamMember> {
    vec![
        sales_member("team-1", "Alex Thompson", "Sales Manager", "AT", 12, 68),
        sales_member("team-2", "Maria Garcia", "Senior Sales", "MG", 15, 72),
        sales_member("team-3", "James Wilson", "Sales Rep", "JW", 10, 65),
        sales_member("team-4", "Sarah Chen", "Sales Rep", "SC", 8, 70),
        sales_member("team-5", "David Lee", "Junior Sales", "DL", 5, 58),
    ]
}

fn sales_member(
    id: &str,
    name: &str,
    role: &str,
    avatar: &str,
    leads_count: u32,
    conversion_rate: u8,
) -> TeamMember {
    TeamMember {
        id: MemberId(id.to_string()),
        name: name.to_string(),
        role: role.to_string(),
        avatar: avatar.to_string(),
        leads_count,
        conversion_rate,
        field: None,
    }
}

fn crew_member(
    id: &str,
    name: &str,
    role: &str,
    avatar: &str,
    leads_count: u32,
    conversion_rate: u8,
    (emergency_leads_count, avg_response_time, revenue_generated): (u32, u32, u32),
) -> TeamMember {
    TeamMember {
        field: Some(FieldStats {
            emergency_leads_count,
            avg_response_time,
            revenue_generated,
        }),
        ..sales_member(id, name, role, avatar, leads_count, conversion_rate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RosterSummary {
    pub members: usize,
    pub average_conversion_rate: f64,
    pub total_leads: u32,
}

impl RosterSummary {
    pub fn from_roster(roster: &[TeamMember]) -> Self {
        let total_leads = roster.iter().map(|member| member.leads_count).sum();
        let average_conversion_rate = if roster.is_empty() {
            0.0
        } else {
            roster
                .iter()
                .map(|member| f64::from(member.conversion_rate))
                .sum::<f64>()
                / roster.len() as f64
        };

        Self {
            members: roster.len(),
            average_conversion_rate,
            total_leads,
        }
    }
}

/// Leads currently pointing at one team member, rolled up for the team view.
#[derive(Debug, Clone, Serialize)]
pub struct TeamWorkload<S: PipelineStatus> {
    pub member_id: MemberId,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub assigned: usize,
    pub status_breakdown: Vec<StatusCount<S>>,
    pub pipeline_value: u64,
    pub realized_revenue: u64,
    /// Realized revenue divided by the member's recorded lead count, rounded.
    pub revenue_per_lead: u64,
}

impl<S: PipelineStatus> TeamWorkload<S> {
    pub fn collect<L>(roster: &[TeamMember], leads: &[L]) -> Vec<Self>
    where
        L: LeadRecord<Status = S>,
    {
        roster
            .iter()
            .map(|member| {
                let assigned: Vec<&L> = leads
                    .iter()
                    .filter(|lead| lead.assigned_to() == Some(&member.id))
                    .collect();

                let status_breakdown = S::ALL
                    .iter()
                    .map(|&status| StatusCount {
                        status,
                        label: status.label(),
                        count: assigned
                            .iter()
                            .filter(|lead| lead.status() == status)
                            .count(),
                    })
                    .collect();

                let pipeline_value = assigned
                    .iter()
                    .map(|lead| u64::from(lead.pipeline_value()))
                    .sum();
                let realized_revenue: u64 = assigned
                    .iter()
                    .filter_map(|lead| lead.realized_value())
                    .map(u64::from)
                    .sum();
                let revenue_per_lead = if member.leads_count == 0 {
                    0
                } else {
                    (realized_revenue as f64 / f64::from(member.leads_count)).round() as u64
                };

                Self {
                    member_id: member.id.clone(),
                    name: member.name.clone(),
                    role: member.role.clone(),
                    avatar: member.avatar.clone(),
                    assigned: assigned.len(),
                    status_breakdown,
                    pipeline_value,
                    realized_revenue,
                    revenue_per_lead,
                }
            })
            .collect()
    }
}
