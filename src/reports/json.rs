//! JSON report generator.

use super::{OutputFormat, ReportConfig, ReportError, ReportGenerator};
use crate::model::{FeedItem, FileRecord, ItemKind, Session, SortMode, Vignette};
use crate::views::{actions_for, DashboardSnapshot, DeleteOutcome, ItemAction, UploadReport};
use chrono::Utc;
use serde::Serialize;
use std::path::Path;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn feed_report(
        &self,
        items: &[FeedItem<'_>],
        session: &Session,
        sort: SortMode,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonFeedReport {
            metadata: JsonReportMetadata::now(),
            sort,
            total: items.len(),
            items: items
                .iter()
                .map(|item| JsonFeedEntry {
                    item,
                    actions: actions_for(item, session),
                })
                .collect(),
        };
        self.render(&report)
    }

    fn dashboard_report(
        &self,
        snapshot: &DashboardSnapshot,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(&JsonDashboardReport {
            metadata: JsonReportMetadata::now(),
            dashboard: snapshot,
        })
    }

    fn upload_report(
        &self,
        report: &UploadReport,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(&JsonUploadReport {
            metadata: JsonReportMetadata::now(),
            uploaded: report.uploaded(),
            failed: report.failed(),
            entries: report,
        })
    }

    fn vignette_report(
        &self,
        vignette: &Vignette,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(vignette)
    }

    fn file_report(
        &self,
        file: &FileRecord,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(file)
    }

    fn delete_report(
        &self,
        kind: ItemKind,
        id: i64,
        outcome: DeleteOutcome,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(&JsonDeleteReport {
            item_type: kind,
            id,
            outcome,
        })
    }

    fn download_report(
        &self,
        file: &FileRecord,
        saved_to: &Path,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(&JsonDownloadReport {
            file,
            saved_to: saved_to.display().to_string(),
        })
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

// JSON structures

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
}

impl JsonReportMetadata {
    fn now() -> Self {
        Self {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct JsonFeedReport<'a> {
    metadata: JsonReportMetadata,
    sort: SortMode,
    total: usize,
    items: Vec<JsonFeedEntry<'a>>,
}

#[derive(Serialize)]
struct JsonFeedEntry<'a> {
    #[serde(flatten)]
    item: &'a FeedItem<'a>,
    actions: Vec<ItemAction>,
}

#[derive(Serialize)]
struct JsonDashboardReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(flatten)]
    dashboard: &'a DashboardSnapshot,
}

#[derive(Serialize)]
struct JsonUploadReport<'a> {
    metadata: JsonReportMetadata,
    uploaded: usize,
    failed: usize,
    #[serde(flatten)]
    entries: &'a UploadReport,
}

#[derive(Serialize)]
struct JsonDeleteReport {
    item_type: ItemKind,
    id: i64,
    outcome: DeleteOutcome,
}

#[derive(Serialize)]
struct JsonDownloadReport<'a> {
    file: &'a FileRecord,
    saved_to: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_feed;
    use serde_json::Value;

    #[test]
    fn test_feed_report_shape() {
        let vignettes = vec![Vignette {
            id: 1,
            title: "B".into(),
            content: Some("Lake".into()),
            created_at: Some("2024-01-02".into()),
        }];
        let files = vec![FileRecord {
            id: 2,
            title: Some("A".into()),
            filename: "a.txt".into(),
            description: None,
            file_type: Some("text/plain".into()),
            created_at: Some("2024-01-01".into()),
        }];
        let items = build_feed(&vignettes, &files, SortMode::TitleAsc);
        let out = JsonReporter::new()
            .feed_report(&items, &Session::guest(), SortMode::TitleAsc, &ReportConfig::default())
            .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["sort"], "title-asc");
        assert_eq!(value["total"], 2);
        assert_eq!(value["metadata"]["tool"]["name"], "family-memories");
        assert_eq!(value["items"][0]["item_type"], "file");
        assert_eq!(value["items"][0]["filename"], "a.txt");
        assert_eq!(value["items"][0]["actions"], serde_json::json!(["view", "download"]));
        assert_eq!(value["items"][1]["item_type"], "vignette");
        assert_eq!(value["items"][1]["content"], "Lake");
    }

    #[test]
    fn test_delete_report() {
        let out = JsonReporter::new()
            .delete_report(ItemKind::Vignette, 9, DeleteOutcome::Declined, &ReportConfig::default())
            .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["item_type"], "vignette");
        assert_eq!(value["outcome"], "declined");
    }

    #[test]
    fn test_compact_output() {
        let out = JsonReporter::new()
            .pretty(false)
            .dashboard_report(&DashboardSnapshot::default(), &ReportConfig::default())
            .unwrap();
        assert!(!out.contains('\n'));
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["stats"]["vignettes"], 0);
    }
}
