//! Report generation for views.
//!
//! Two output formats:
//! - Text: colored cards for the terminal
//! - JSON: structured data for scripting

mod json;
mod text;
mod types;

pub use json::JsonReporter;
pub use text::TextReporter;
pub use types::{OutputFormat, ReportConfig};

use crate::model::{FeedItem, FileRecord, ItemKind, Session, SortMode, Vignette};
use crate::views::{DashboardSnapshot, DeleteOutcome, UploadReport};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// The merged feed, with the actions the session is offered
    fn feed_report(
        &self,
        items: &[FeedItem<'_>],
        session: &Session,
        sort: SortMode,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Dashboard counts and recent vignettes
    fn dashboard_report(
        &self,
        snapshot: &DashboardSnapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Per-file results of an upload batch
    fn upload_report(
        &self,
        report: &UploadReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// A single vignette, e.g. after saving
    fn vignette_report(
        &self,
        vignette: &Vignette,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// A single file, e.g. after editing
    fn file_report(&self, file: &FileRecord, config: &ReportConfig)
        -> Result<String, ReportError>;

    /// Result of a confirmation-gated delete
    fn delete_report(
        &self,
        kind: ItemKind,
        id: i64,
        outcome: DeleteOutcome,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Where a downloaded file was saved
    fn download_report(
        &self,
        file: &FileRecord,
        saved_to: &Path,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> OutputFormat;

    /// Write a feed report to a writer
    fn write_feed_report(
        &self,
        items: &[FeedItem<'_>],
        session: &Session,
        sort: SortMode,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.feed_report(items, session, sort, config)?;
        writeln!(writer, "{report}")?;
        Ok(())
    }
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter(format: OutputFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        OutputFormat::Text => {
            if use_color {
                Box::new(TextReporter::new())
            } else {
                Box::new(TextReporter::new().no_color())
            }
        }
        OutputFormat::Json => Box::new(JsonReporter::new()),
    }
}
