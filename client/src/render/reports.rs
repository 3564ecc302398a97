//! Report history list.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use super::{Entry, PlaceholderText, entries};
use crate::net::types::ReportRecord;
use crate::state::dashboard::LoadState;
use crate::util::clock;

pub const TEXT: PlaceholderText = PlaceholderText {
    loading: "Loading reports...",
    failed: "Failed to load reports",
    empty: "No reports generated yet",
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub key: String,
    pub report_id: Option<i64>,
    pub title: String,
    pub generated_on: String,
    pub summary: String,
}

#[must_use]
pub fn row(record: &ReportRecord) -> ReportRow {
    let id = record.report_id.map_or_else(|| "N/A".to_owned(), |id| id.to_string());
    ReportRow {
        title: format!("#{id} {}", record.report_type.to_uppercase()),
        key: id,
        report_id: record.report_id,
        generated_on: clock::display_date(record.generated_on.as_deref()),
        summary: record.details.as_deref().and_then(|d| d.lines().next()).unwrap_or_default().trim().to_owned(),
    }
}

/// Newest first.
#[must_use]
pub fn rows(load: &LoadState<ReportRecord>) -> Vec<Entry<ReportRow>> {
    let mut rows = entries(load, &TEXT, row);
    if load.is_loaded() {
        rows.reverse();
    }
    rows
}
