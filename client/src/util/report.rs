//! Report request building, preview model and text download.
//!
//! DESIGN
//! ======
//! Preview and download are both derived from the one `GeneratedReport`
//! stored after `report/generate` succeeds, so the downloaded file always
//! describes the report the user is looking at, even if the type/range
//! selectors changed afterwards.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use time::Date;

use crate::net::types::{ReportRecord, ReportRequest};
use crate::util::clock;

/// Report kinds offered in the selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportType {
    #[default]
    Inventory,
    Shipment,
    Space,
    Maintenance,
}

impl ReportType {
    pub const ALL: [Self; 4] = [Self::Inventory, Self::Shipment, Self::Space, Self::Maintenance];

    /// Wire value (`reportType`).
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Shipment => "shipment",
            Self::Space => "space",
            Self::Maintenance => "maintenance",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Inventory => "Inventory Report",
            Self::Shipment => "Shipment Report",
            Self::Space => "Space Utilization Report",
            Self::Maintenance => "Maintenance Report",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value().eq_ignore_ascii_case(value.trim()))
    }
}

/// Date-range choices, in days.
pub const RANGE_OPTIONS: [u32; 4] = [7, 30, 90, 365];

pub const DEFAULT_RANGE_DAYS: u32 = 30;

/// Body for `report/generate`.
#[must_use]
pub fn report_request(report_type: ReportType, range_days: u32) -> ReportRequest {
    ReportRequest {
        report_type: report_type.value().to_owned(),
        details: format!("{} report for the last {range_days} days", report_type.value()),
    }
}

/// Placeholder quality bars shown under every preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryBar {
    pub label: &'static str,
    pub percent: u32,
}

pub const SUMMARY_BARS: [SummaryBar; 3] = [
    SummaryBar { label: "Data Points", percent: 80 },
    SummaryBar { label: "Completeness", percent: 95 },
    SummaryBar { label: "Accuracy", percent: 90 },
];

/// A report returned by the server plus the range it was requested for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedReport {
    pub record: ReportRecord,
    pub report_type: String,
    pub range_days: u32,
    pub generated_on: Date,
}

/// Everything the preview panel draws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportPreview {
    pub title: String,
    pub report_type: String,
    pub range: String,
    pub generated_on: String,
    pub report_id: String,
    pub details: String,
    pub bars: [SummaryBar; 3],
}

/// Text download: file name and contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportDownload {
    pub file_name: String,
    pub text: String,
}

impl GeneratedReport {
    /// Wrap a server record. `fallback_type` and `today` fill fields the
    /// server left empty.
    #[must_use]
    pub fn new(record: ReportRecord, fallback_type: ReportType, range_days: u32, today: Date) -> Self {
        let report_type = if record.report_type.trim().is_empty() {
            fallback_type.value().to_owned()
        } else {
            record.report_type.trim().to_owned()
        };
        let generated_on = record.generated_on.as_deref().and_then(clock::parse_date).unwrap_or(today);
        Self { record, report_type, range_days, generated_on }
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("{} REPORT", self.report_type.to_uppercase())
    }

    fn report_id(&self) -> String {
        self.record.report_id.map_or_else(|| "N/A".to_owned(), |id| id.to_string())
    }

    fn details(&self) -> String {
        self.record
            .details
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or("No additional details available.")
            .to_owned()
    }

    #[must_use]
    pub fn range_label(&self) -> String {
        format!("Last {} days", self.range_days)
    }

    #[must_use]
    pub fn preview(&self) -> ReportPreview {
        ReportPreview {
            title: self.title(),
            report_type: self.report_type.clone(),
            range: self.range_label(),
            generated_on: clock::format_date(self.generated_on),
            report_id: self.report_id(),
            details: self.details(),
            bars: SUMMARY_BARS,
        }
    }

    #[must_use]
    pub fn download(&self) -> ReportDownload {
        let text = format!(
            "{}\nGenerated on: {}\nDate Range: {}\nReport ID: {}\n\n{}\n",
            self.title(),
            clock::format_date(self.generated_on),
            self.range_label(),
            self.report_id(),
            self.details(),
        );
        let file_name = format!("{}_report_{}.txt", self.report_type.to_lowercase(), clock::iso_date(self.generated_on));
        ReportDownload { file_name, text }
    }
}

/// Hand `download` to the browser as a `data:` link click.
pub fn trigger_download(download: &ReportDownload) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(el) = doc.create_element("a") else {
            return;
        };
        let Ok(link) = el.dyn_into::<web_sys::HtmlAnchorElement>() else {
            return;
        };
        let encoded: String = js_sys::encode_uri_component(&download.text).into();
        link.set_href(&format!("data:text/plain;charset=utf-8,{encoded}"));
        link.set_download(&download.file_name);
        link.click();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = download;
    }
}
