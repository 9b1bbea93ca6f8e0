//! Report output stage.

use super::OutputTarget;
use crate::config::AppConfig;
use crate::model::{FeedItem, FileRecord, ItemKind, Session, SortMode, Vignette};
use crate::reports::{create_reporter, ReportConfig};
use crate::views::{DashboardSnapshot, DeleteOutcome, UploadReport};
use anyhow::{Context, Result};
use std::path::Path;

/// Something a command wants rendered.
#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    Feed {
        items: &'a [FeedItem<'a>],
        session: &'a Session,
        sort: SortMode,
    },
    Dashboard(&'a DashboardSnapshot),
    Upload(&'a UploadReport),
    Vignette(&'a Vignette),
    File(&'a FileRecord),
    Deleted {
        kind: ItemKind,
        id: i64,
        outcome: DeleteOutcome,
    },
    Downloaded {
        file: &'a FileRecord,
        saved_to: &'a Path,
    },
}

/// Report settings derived from the application config.
#[must_use]
pub fn report_config(config: &AppConfig) -> ReportConfig {
    ReportConfig {
        preview_width: config.feed.preview_width,
        quiet: config.behavior.quiet,
    }
}

/// Render `report` in the configured format and write it to `target`.
///
/// Color is only used when writing to a terminal.
pub fn output_report(config: &AppConfig, report: Report<'_>, target: &OutputTarget) -> Result<()> {
    let use_color = target.wants_color(config.output.no_color);
    let reporter = create_reporter(config.output.format, use_color);
    tracing::debug!("Rendering {} report to {}", reporter.format(), target.describe());
    let report_config = report_config(config);

    let content = match report {
        Report::Feed {
            items,
            session,
            sort,
        } => reporter.feed_report(items, session, sort, &report_config),
        Report::Dashboard(snapshot) => reporter.dashboard_report(snapshot, &report_config),
        Report::Upload(upload) => reporter.upload_report(upload, &report_config),
        Report::Vignette(vignette) => reporter.vignette_report(vignette, &report_config),
        Report::File(file) => reporter.file_report(file, &report_config),
        Report::Deleted { kind, id, outcome } => {
            reporter.delete_report(kind, id, outcome, &report_config)
        }
        Report::Downloaded { file, saved_to } => {
            reporter.download_report(file, saved_to, &report_config)
        }
    }
    .with_context(|| format!("Failed to generate {} report", reporter.format()))?;

    target.write(&content, config.behavior.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::OutputFormat;

    #[test]
    fn test_report_config_from_app_config() {
        let mut config = AppConfig::builder().quiet(true).build();
        config.feed.preview_width = 42;
        let rc = report_config(&config);
        assert_eq!(rc.preview_width, 42);
        assert!(rc.quiet);
    }

    #[test]
    fn test_output_json_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("dashboard.json");
        let config = AppConfig::builder()
            .output_format(OutputFormat::Json)
            .quiet(true)
            .build();

        output_report(
            &config,
            Report::Dashboard(&DashboardSnapshot::default()),
            &OutputTarget::File(path.clone()),
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["stats"]["files"], 0);
    }
}
