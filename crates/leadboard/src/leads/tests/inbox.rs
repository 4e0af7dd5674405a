use chrono::Duration;

use super::common::{converted_lead, crm_lead, now, rating, roofing_lead};
use crate::leads::domain::{CrmStatus, LeadSource, RoofingLead, RoofingStatus};
use crate::leads::inbox::{
    write_csv, Inbox, InboxRow, LeadFilter, SortKey, SourceFilter, StatusFilter,
    NO_RESULTS_MESSAGE,
};

fn mixed_inbox() -> Vec<RoofingLead> {
    vec![
        RoofingLead {
            emergency_level: rating(10),
            ..roofing_lead("lead-1", RoofingStatus::Contacted)
        },
        RoofingLead {
            emergency_level: rating(6),
            created_at: now() - Duration::hours(2),
            ..roofing_lead("lead-2", RoofingStatus::Emergency)
        },
        RoofingLead {
            source: LeadSource::Phone,
            ..converted_lead("lead-3", 1200, Some(1100))
        },
        RoofingLead {
            emergency_level: rating(9),
            created_at: now() - Duration::hours(1),
            ..roofing_lead("lead-4", RoofingStatus::Emergency)
        },
        converted_lead("lead-5", 700, None),
        RoofingLead {
            source: LeadSource::Phone,
            ..roofing_lead("lead-6", RoofingStatus::Scheduled)
        },
    ]
}

fn ids<L: crate::leads::record::LeadRecord>(rows: &[&L]) -> Vec<String> {
    rows.iter().map(|lead| lead.id().to_string()).collect()
}

#[test]
fn priority_sort_puts_emergencies_first() {
    let leads = mixed_inbox();
    let rows = Inbox::new(&leads).matching(&LeadFilter::default(), SortKey::Priority);

    assert_eq!(
        ids(&rows),
        vec!["lead-4", "lead-2", "lead-1", "lead-3", "lead-5", "lead-6"]
    );
    let first_other = rows
        .iter()
        .position(|lead| !lead.is_emergency())
        .expect("non-emergency lead present");
    assert!(rows[first_other..].iter().all(|lead| !lead.is_emergency()));
}

#[test]
fn source_and_status_filters_combine() {
    let leads = mixed_inbox();
    let filter = LeadFilter {
        source: SourceFilter::Only(LeadSource::Phone),
        status: StatusFilter::Only(RoofingStatus::Converted),
    };
    let rows = Inbox::new(&leads).matching(&filter, SortKey::Date);

    assert_eq!(ids(&rows), vec!["lead-3"]);
    let expected = leads
        .iter()
        .filter(|lead| lead.source == LeadSource::Phone && lead.status == RoofingStatus::Converted)
        .count();
    assert_eq!(rows.len(), expected);
}

#[test]
fn value_sort_breaks_ties_on_id() {
    let leads = mixed_inbox();
    let rows = Inbox::new(&leads).matching(&LeadFilter::default(), SortKey::Value);

    assert_eq!(
        ids(&rows),
        vec!["lead-3", "lead-1", "lead-2", "lead-4", "lead-6", "lead-5"]
    );
}

#[test]
fn date_sort_is_newest_first() {
    let leads = mixed_inbox();
    let rows = Inbox::new(&leads).matching(&LeadFilter::default(), SortKey::Date);

    assert_eq!(&ids(&rows)[..2], &["lead-4".to_string(), "lead-2".to_string()]);
}

#[test]
fn page_applies_limit_but_reports_total() {
    let leads = mixed_inbox();
    let page = Inbox::new(&leads)
        .with_limit(2)
        .page(&LeadFilter::default(), SortKey::Priority);

    assert_eq!(page.total_matches, 6);
    assert_eq!(page.rows.len(), 2);
    assert!(page.empty_message().is_none());
}

#[test]
fn empty_result_reports_no_results_state() {
    let leads = vec![crm_lead("lead-1", CrmStatus::New, 80, 20_000)];
    let filter = LeadFilter {
        source: SourceFilter::Only(LeadSource::Chatbot),
        status: StatusFilter::All,
    };
    let page = Inbox::new(&leads).page(&filter, SortKey::Priority);

    assert!(page.is_empty());
    assert_eq!(page.empty_message(), Some(NO_RESULTS_MESSAGE));
}

#[test]
fn crm_priority_sorts_by_score() {
    let leads = vec![
        crm_lead("lead-2", CrmStatus::New, 72, 10_000),
        crm_lead("lead-1", CrmStatus::Qualified, 91, 30_000),
        crm_lead("lead-3", CrmStatus::Closed, 72, 50_000),
    ];
    let rows = Inbox::new(&leads).matching(&LeadFilter::default(), SortKey::Priority);

    assert_eq!(ids(&rows), vec!["lead-1", "lead-2", "lead-3"]);
}

#[test]
fn filters_parse_from_cli_values() {
    assert_eq!("all".parse::<SourceFilter>(), Ok(SourceFilter::All));
    assert_eq!(
        "phone".parse::<SourceFilter>(),
        Ok(SourceFilter::Only(LeadSource::Phone))
    );
    assert_eq!(
        "Converted".parse::<StatusFilter<RoofingStatus>>(),
        Ok(StatusFilter::Only(RoofingStatus::Converted))
    );
    assert_eq!("emergency".parse::<SortKey>(), Ok(SortKey::Priority));
    assert!("fax".parse::<SourceFilter>().is_err());
    assert!("closed".parse::<StatusFilter<RoofingStatus>>().is_err());
}

#[test]
fn csv_export_writes_header_and_rows() {
    let leads = mixed_inbox();
    let rows: Vec<InboxRow> = leads.iter().take(2).map(InboxRow::from_lead).collect();
    let mut buffer = Vec::new();
    write_csv(&rows, &mut buffer).expect("csv writes");

    let text = String::from_utf8(buffer).expect("utf8 csv");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,headline,source,status,value,realized_value,assigned_to,created_at,created_on")
    );
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("lead-1,Jennifer Walsh"));
}

#[test]
fn csv_export_ignores_page_limit() {
    let leads: Vec<RoofingLead> = (0..25)
        .map(|index| roofing_lead(&format!("lead-{index:02}"), RoofingStatus::New))
        .collect();
    let inbox = Inbox::new(&leads);
    assert_eq!(
        inbox
            .page(&LeadFilter::default(), SortKey::Priority)
            .rows
            .len(),
        20
    );

    let mut buffer = Vec::new();
    let exported = inbox
        .export_csv(&LeadFilter::default(), SortKey::Priority, &mut buffer)
        .expect("csv writes");

    let text = String::from_utf8(buffer).expect("utf8 csv");
    assert_eq!(exported, 25);
    assert_eq!(text.lines().count(), 26);
    assert!(text.contains("lead-24,"));
}

#[test]
fn csv_export_respects_filter() {
    let leads = mixed_inbox();
    let filter = LeadFilter {
        source: SourceFilter::Only(LeadSource::Phone),
        status: StatusFilter::All,
    };
    let mut buffer = Vec::new();
    let exported = Inbox::new(&leads)
        .with_limit(1)
        .export_csv(&filter, SortKey::Value, &mut buffer)
        .expect("csv writes");

    assert_eq!(exported, 2);
    let text = String::from_utf8(buffer).expect("utf8 csv");
    assert!(text.contains("lead-3,"));
    assert!(text.contains("lead-6,"));
}

#[test]
fn filter_and_sort_labels_are_readable() {
    assert_eq!(SourceFilter::All.label(), "All");
    assert_eq!(SourceFilter::Only(LeadSource::Phone).label(), "Phone");
    assert_eq!(StatusFilter::<CrmStatus>::All.label(), "All");
    assert_eq!(StatusFilter::Only(RoofingStatus::Scheduled).label(), "Scheduled");
    assert_eq!(SortKey::Value.label(), "Value");
}
