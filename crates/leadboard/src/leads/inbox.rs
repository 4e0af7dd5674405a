use super::display::{format_datetime, DATE_PATTERN};
use super::domain::{LeadSource, ParseValueError};
use super::record::{LeadRecord, PipelineStatus};
use serde::{Deserialize, Serialize};
use std::io;
use std::str::FromStr;

pub const NO_RESULTS_MESSAGE: &str = "No leads found matching your filters.";
pub const DEFAULT_PAGE_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFilter {
    #[default]
    All,
    Only(LeadSource),
}

impl SourceFilter {
    pub fn matches(self, source: LeadSource) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == source,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(source) => source.label(),
        }
    }
}

impl FromStr for SourceFilter {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        Self::All
    }
}

impl<S: PipelineStatus> StatusFilter<S> {
    pub fn matches(self, status: S) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == status,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }
}

impl<S> FromStr for StatusFilter<S>
where
    S: FromStr<Err = ParseValueError>,
{
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Both predicates must hold for a lead to be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadFilter<S> {
    pub source: SourceFilter,
    pub status: StatusFilter<S>,
}

impl<S> Default for LeadFilter<S> {
    fn default() -> Self {
        Self {
            source: SourceFilter::All,
            status: StatusFilter::All,
        }
    }
}

impl<S: PipelineStatus> LeadFilter<S> {
    pub fn matches<L: LeadRecord<Status = S>>(&self, lead: &L) -> bool {
        self.source.matches(lead.source()) && self.status.matches(lead.status())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Variant priority order (emergency first for roofing, score for CRM).
    #[default]
    Priority,
    /// Newest first.
    Date,
    /// Highest estimated value first.
    Value,
}

impl SortKey {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Priority => "Priority",
            Self::Date => "Date",
            Self::Value => "Value",
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "priority" | "emergency" | "score" => Ok(Self::Priority),
            "date" => Ok(Self::Date),
            "value" => Ok(Self::Value),
            _ => Err(ParseValueError::Unknown {
                kind: "sort key",
                value: s.to_string(),
                expected: "priority, date, value",
            }),
        }
    }
}

/// Filtered, sorted copy of a lead collection. The source slice is never reordered.
#[derive(Debug)]
pub struct InboxPage<'a, L> {
    pub total_matches: usize,
    pub rows: Vec<&'a L>,
}

impl<L> InboxPage<'_, L> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Message the presentation layer shows instead of an empty list.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(NO_RESULTS_MESSAGE)
    }
}

pub struct Inbox<'a, L> {
    leads: &'a [L],
    limit: usize,
}

impl<'a, L: LeadRecord> Inbox<'a, L> {
    pub fn new(leads: &'a [L]) -> Self {
        Self {
            leads,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Every lead matching the filter, sorted; ties always end on lead id.
    pub fn matching(&self, filter: &LeadFilter<L::Status>, sort: SortKey) -> Vec<&'a L> {
        let mut rows: Vec<&'a L> = self
            .leads
            .iter()
            .filter(|lead| filter.matches(*lead))
            .collect();

        rows.sort_by(|a, b| match sort {
            SortKey::Priority => a.priority_cmp(b),
            SortKey::Date => b
                .created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(b.id())),
            SortKey::Value => b
                .pipeline_value()
                .cmp(&a.pipeline_value())
                .then_with(|| a.id().cmp(b.id())),
        });
        rows
    }

    pub fn page(&self, filter: &LeadFilter<L::Status>, sort: SortKey) -> InboxPage<'a, L> {
        let mut rows = self.matching(filter, sort);
        let total_matches = rows.len();
        rows.truncate(self.limit);
        InboxPage {
            total_matches,
            rows,
        }
    }

    /// Writes every matching lead as CSV. The page limit does not apply.
    pub fn export_csv<W: io::Write>(
        &self,
        filter: &LeadFilter<L::Status>,
        sort: SortKey,
        writer: W,
    ) -> Result<usize, csv::Error> {
        let rows: Vec<InboxRow> = self
            .matching(filter, sort)
            .into_iter()
            .map(InboxRow::from_lead)
            .collect();
        write_csv(&rows, writer)?;
        Ok(rows.len())
    }
}

/// Flat row used for CSV export and list rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InboxRow {
    pub id: String,
    pub name: String,
    pub headline: String,
    pub source: &'static str,
    pub status: &'static str,
    pub value: u32,
    pub realized_value: Option<u32>,
    pub assigned_to: Option<String>,
    pub created_at: String,
    pub created_on: String,
}

impl InboxRow {
    pub fn from_lead<L: LeadRecord>(lead: &L) -> Self {
        Self {
            id: lead.id().to_string(),
            name: lead.name().to_string(),
            headline: lead.headline().to_string(),
            source: lead.source().label(),
            status: lead.status().label(),
            value: lead.pipeline_value(),
            realized_value: lead.realized_value(),
            assigned_to: lead.assigned_to().map(|member| member.to_string()),
            created_at: lead.created_at().to_rfc3339(),
            created_on: format_datetime(lead.created_at(), DATE_PATTERN),
        }
    }
}

pub fn write_csv<W: io::Write>(rows: &[InboxRow], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
