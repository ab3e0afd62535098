use super::records::SearchResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::common::SearchCriterion;
use chrono::{DateTime, FixedOffset, SecondsFormat, TimeDelta, Utc};
use serde_json::{Map, Value};

/// Report name the gateway expects for transaction searches.
const DEFAULT_REPORT_NAME: &str = "Search";
/// Rows returned when the caller does not set `end_row`.
const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_START_ROW: u32 = 1;

/// Caller side of a report search. Every field left as `None` is filled
/// with a default when the request is built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchFilter {
    pub name: Option<String>,
    pub start_date: Option<DateTime<FixedOffset>>,
    pub end_date: Option<DateTime<FixedOffset>>,
    pub start_row: Option<u32>,
    pub end_row: Option<u32>,
    pub criteria: Option<Vec<SearchCriterion>>,
    /// Additional report parameters, sent as given unless a typed field
    /// already sets the same key.
    pub extra: Map<String, Value>,
}

impl SearchFilter {
    #[must_use]
    pub fn with_start_date(mut self, start_date: DateTime<FixedOffset>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub fn with_end_date(mut self, end_date: DateTime<FixedOffset>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn with_rows(mut self, start_row: u32, end_row: Option<u32>) -> Self {
        self.start_row = Some(start_row);
        self.end_row = end_row;
        self
    }

    #[must_use]
    pub fn with_criterion(mut self, criterion: SearchCriterion) -> Self {
        self.criteria.get_or_insert_with(Vec::new).push(criterion);
        self
    }
}

/// Json body of `POST reports`.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub(crate) struct ReportQuery {
    pub(crate) name: String,
    pub(crate) start_date: String,
    pub(crate) end_date: String,
    pub(crate) start_row: u32,
    pub(crate) end_row: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) criteria: Option<Vec<SearchCriterion>>,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

impl ReportQuery {
    /// Resolves the one-day window and the first page of rows.
    ///
    /// The window ends one second after `now` (or starts one second after the
    /// given `end_date` minus a day); an explicit `start_date` moves the default
    /// end to one day after it. The page holds ten rows from `start_row`.
    pub(crate) fn from_filter(filter: SearchFilter, now: DateTime<Utc>) -> Self {
        let day = TimeDelta::days(1);
        let second = TimeDelta::seconds(1);

        let basis = filter.end_date.unwrap_or_else(|| now.fixed_offset());
        let start_date = filter.start_date.unwrap_or(basis - day + second);
        let end_date = filter.end_date.unwrap_or(start_date + day);

        let start_row = filter.start_row.unwrap_or(DEFAULT_START_ROW);
        let end_row = filter.end_row.unwrap_or(start_row.saturating_add(DEFAULT_PAGE_SIZE - 1));

        let mut extra = filter.extra;
        for key in ["name", "start_date", "end_date", "start_row", "end_row"] {
            extra.remove(key);
        }
        if filter.criteria.is_some() {
            extra.remove("criteria");
        }

        Self {
            name: filter.name.unwrap_or_else(|| String::from(DEFAULT_REPORT_NAME)),
            start_date: format_date(&start_date),
            end_date: format_date(&end_date),
            start_row,
            end_row,
            criteria: filter.criteria,
            extra,
        }
    }
}

fn format_date(date: &DateTime<FixedOffset>) -> String { date.to_rfc3339_opts(SecondsFormat::Secs, true) }

/// Request type for `POST reports`.
#[derive(Debug)]
pub(crate) struct SearchRequest {
    body: ReportQuery,
}

impl SearchRequest {
    pub(crate) fn new(filter: SearchFilter, now: DateTime<Utc>) -> Self {
        Self { body: ReportQuery::from_filter(filter, now) }
    }
}

impl HTTPRequestType for SearchRequest {
    type Response = SearchResponse;
    type Body = ReportQuery;
    fn endpoint(&self) -> String { String::from("reports") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn body(&self) -> Option<&Self::Body> { Some(&self.body) }
}
