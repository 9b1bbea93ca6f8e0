//! Text report generator for terminal output.
//!
//! Renders feed items and dashboard stats as compact cards.

use super::{OutputFormat, ReportConfig, ReportError, ReportGenerator};
use crate::model::{
    display_date, FeedItem, FeedSource, FileRecord, ItemKind, Session, SortMode, Vignette,
};
use crate::utils::{single_line, truncate_to_width};
use crate::views::{actions_for, DashboardSnapshot, DeleteOutcome, UploadOutcome, UploadReport};
use std::path::Path;

/// Shown when both lists are empty.
pub const EMPTY_FEED: &str =
    "No content yet. Create your first vignette or upload a file to begin!";

/// Shown on the dashboard when there are no vignettes.
pub const NO_RECENT_VIGNETTES: &str =
    "No vignettes yet. Create your first story and start preserving your family memories.";

const VIGNETTE_ICON: &str = "📖";

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

/// Text reporter for terminal output
pub struct TextReporter {
    /// Use colored output
    colored: bool,
}

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn header(&self, lines: &mut Vec<String>, title: &str, subtitle: Option<&str>) {
        lines.push(self.color(title, "bold"));
        if let Some(subtitle) = subtitle {
            lines.push(self.color(subtitle, "dim"));
        }
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
    }

    fn vignette_card(&self, lines: &mut Vec<String>, vignette: &Vignette, width: usize) {
        lines.push(format!(
            "{} {}",
            self.color(&format!("{VIGNETTE_ICON} Vignette"), "cyan"),
            self.color(&format!("#{}", vignette.id), "dim")
        ));
        lines.push(format!("  {}", self.color(&vignette.title, "bold")));
        lines.push(format!(
            "  {}",
            self.color(&display_date(vignette.created()), "dim")
        ));
        let preview = single_line(vignette.content_or_placeholder());
        lines.push(format!("  {}", truncate_to_width(&preview, width)));
    }

    fn file_card(&self, lines: &mut Vec<String>, file: &FileRecord, width: usize) {
        lines.push(format!(
            "{} {}",
            self.color(&format!("{} File", file.category().icon()), "cyan"),
            self.color(&format!("#{}", file.id), "dim")
        ));
        lines.push(format!("  {}", self.color(file.display_title(), "bold")));
        lines.push(format!(
            "  {}",
            self.color(&display_date(file.created()), "dim")
        ));
        if let Some(description) = file.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(format!(
                "  {}",
                truncate_to_width(&single_line(description), width)
            ));
        }
        lines.push(format!("  {}", self.color(file.type_label(), "dim")));
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn feed_report(
        &self,
        items: &[FeedItem<'_>],
        session: &Session,
        sort: SortMode,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        if !config.quiet {
            self.header(
                &mut lines,
                "Life Stories & Vignettes",
                Some("Capture and preserve your memories"),
            );
            lines.push(format!(
                "{}  {} · {}",
                self.color("Sort:", "cyan"),
                sort.label(),
                plural(items.len(), "item", "items")
            ));
            lines.push(String::new());
        }

        if items.is_empty() {
            lines.push(self.color(EMPTY_FEED, "dim"));
            return Ok(lines.join("\n"));
        }

        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            match item.source {
                FeedSource::Vignette(v) => self.vignette_card(&mut lines, v, config.preview_width),
                FeedSource::File(f) => self.file_card(&mut lines, f, config.preview_width),
            }
            let actions: Vec<&str> = actions_for(item, session)
                .into_iter()
                .map(|a| a.label())
                .collect();
            lines.push(format!("  {}", self.color(&actions.join(" · "), "yellow")));
        }

        Ok(lines.join("\n"))
    }

    fn dashboard_report(
        &self,
        snapshot: &DashboardSnapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        if !config.quiet {
            self.header(
                &mut lines,
                "Family Memories",
                Some("Preserving stories for generations to come"),
            );
        }

        let stats = snapshot.stats;
        for (label, count) in [
            ("Vignettes", stats.vignettes),
            ("Photos", stats.photos),
            ("Audio", stats.audio),
            ("Files", stats.files),
        ] {
            lines.push(format!(
                "{}  {}",
                self.color(&format!("{label:<10}"), "cyan"),
                self.color(&count.to_string(), "bold")
            ));
        }

        lines.push(String::new());
        lines.push(self.color("Recent Vignettes", "bold"));
        if snapshot.recent_vignettes.is_empty() {
            lines.push(format!("  {}", self.color(NO_RECENT_VIGNETTES, "dim")));
        }
        for vignette in &snapshot.recent_vignettes {
            lines.push(format!(
                "  {}  {}",
                self.color(&vignette.title, "bold"),
                self.color(&display_date(vignette.created()), "dim")
            ));
            let preview = single_line(vignette.content_or_placeholder());
            lines.push(format!(
                "    {}",
                truncate_to_width(&preview, config.preview_width)
            ));
        }

        Ok(lines.join("\n"))
    }

    fn upload_report(
        &self,
        report: &UploadReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        for entry in &report.entries {
            match &entry.outcome {
                UploadOutcome::Uploaded { file } => lines.push(format!(
                    "{} {} → file #{}",
                    self.color("✓", "green"),
                    entry.name,
                    file.id
                )),
                UploadOutcome::Failed { message } => {
                    lines.push(format!("{} {}", self.color("✗", "red"), message));
                }
            }
        }

        if !config.quiet {
            let total = report.entries.len();
            let summary = format!(
                "Uploaded {} of {}",
                report.uploaded(),
                plural(total, "file", "files")
            );
            let color = if report.has_failures() { "yellow" } else { "green" };
            lines.push(String::new());
            lines.push(self.color(&summary, color));
        }

        Ok(lines.join("\n"))
    }

    fn vignette_report(
        &self,
        vignette: &Vignette,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(format!(
            "{} {}",
            self.color(&vignette.title, "bold"),
            self.color(&format!("#{}", vignette.id), "dim")
        ));
        lines.push(self.color(&display_date(vignette.created()), "dim"));
        lines.push(String::new());
        lines.push(vignette.content_or_placeholder().to_string());
        Ok(lines.join("\n"))
    }

    fn file_report(
        &self,
        file: &FileRecord,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.file_card(&mut lines, file, config.preview_width);
        lines.push(format!(
            "  {}  {}",
            self.color("Filename:", "cyan"),
            file.filename
        ));
        Ok(lines.join("\n"))
    }

    fn delete_report(
        &self,
        kind: ItemKind,
        id: i64,
        outcome: DeleteOutcome,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let noun = kind.label().to_lowercase();
        Ok(match outcome {
            DeleteOutcome::Deleted => format!(
                "{} Deleted {noun} #{id}",
                self.color("✓", "green")
            ),
            DeleteOutcome::Declined => {
                self.color(&format!("Kept {noun} #{id}; nothing was deleted"), "dim")
            }
        })
    }

    fn download_report(
        &self,
        file: &FileRecord,
        saved_to: &Path,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        Ok(format!(
            "{} Saved {} to {}",
            self.color("✓", "green"),
            self.color(file.display_title(), "bold"),
            saved_to.display()
        ))
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}
