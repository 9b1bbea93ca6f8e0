//! File command handlers.

use super::require_admin;
use crate::client::MemoriesBackend;
use crate::config::AppConfig;
use crate::model::{FileRecord, ItemKind};
use crate::pipeline::{exit_codes, output_report, OutputTarget, Report};
use crate::views::{alerts, Confirm, FeedView};
use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::{Path, PathBuf};

fn fetch_file(view: &mut FeedView, backend: &dyn MemoriesBackend, id: i64) -> Result<FileRecord> {
    view.refresh_files(backend).context("Failed to fetch files")?;
    view.find_file(id)
        .cloned()
        .with_context(|| format!("File {id} not found"))
}

/// Upload local files one after another.
///
/// Returns [`exit_codes::PARTIAL_FAILURE`] when any file failed.
pub fn run_file_upload(
    backend: &dyn MemoriesBackend,
    config: &AppConfig,
    paths: &[PathBuf],
    target: &OutputTarget,
) -> Result<i32> {
    if paths.is_empty() {
        anyhow::bail!("No files selected for upload");
    }

    let mut view = FeedView::new(config.session());
    let report = view.upload_files(backend, paths);
    output_report(config, Report::Upload(&report), target)?;

    if report.has_failures() {
        tracing::warn!(
            "{} of {} uploads failed",
            report.failed(),
            report.entries.len()
        );
        Ok(exit_codes::PARTIAL_FAILURE)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// Save a file locally, to `dest` or the configured download directory.
pub fn run_file_download(
    backend: &dyn MemoriesBackend,
    config: &AppConfig,
    id: i64,
    dest: Option<&Path>,
    target: &OutputTarget,
) -> Result<i32> {
    let mut view = FeedView::new(config.session());
    let file = fetch_file(&mut view, backend, id)?;
    let dest = dest.map_or_else(|| config.download.target_dir(), Path::to_path_buf);

    let saved_to = view.download(backend, &file, &dest).map_err(|e| {
        let message = alerts::download_failed(&e);
        anyhow::Error::new(e).context(message)
    })?;

    output_report(
        config,
        Report::Downloaded {
            file: &file,
            saved_to: &saved_to,
        },
        target,
    )?;
    Ok(exit_codes::SUCCESS)
}

/// Preview a file inline.
///
/// Text is printed directly. Other viewable types are written to a
/// temporary file whose path is shown; with `hold_open` the preview stays
/// open until Enter is pressed. The temporary file is removed on close.
pub fn run_file_view(
    backend: &dyn MemoriesBackend,
    config: &AppConfig,
    id: i64,
    hold_open: bool,
    target: &OutputTarget,
) -> Result<i32> {
    let mut view = FeedView::new(config.session());
    let file = fetch_file(&mut view, backend, id)?;

    let shown = {
        let preview = view.open_preview(backend, &file).map_err(|e| {
            let message = alerts::view_failed(&e);
            anyhow::Error::new(e).context(message)
        })?;

        if preview.blob.mime_type().contains("text") {
            let text = preview.blob.read_text()?;
            target.write(&text, config.behavior.quiet)
        } else {
            let path = preview.blob.path().to_path_buf();
            output_report(config, Report::File(&preview.file), target).map(|()| {
                eprintln!("Preview open at {}", path.display());
                if hold_open {
                    eprint!("Press Enter to close the preview ");
                    let mut line = String::new();
                    // EOF or a read error closes the preview too.
                    let _ = std::io::stdin().lock().read_line(&mut line);
                }
            })
        }
    };

    view.close_preview();
    shown?;
    Ok(exit_codes::SUCCESS)
}

/// Change a file's title and/or description. Fields left as `None` keep
/// their current value.
pub fn run_file_edit(
    backend: &dyn MemoriesBackend,
    config: &AppConfig,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    target: &OutputTarget,
) -> Result<i32> {
    require_admin(config, "Editing a file")?;
    if title.is_none() && description.is_none() {
        anyhow::bail!("Nothing to change: pass --title and/or --description");
    }

    let mut view = FeedView::new(config.session());
    let file = fetch_file(&mut view, backend, id)?;

    let form = view.begin_file_edit(&file);
    if let Some(title) = title {
        form.title = title;
    }
    if let Some(description) = description {
        form.description = description;
    }

    let updated = view
        .save_file_edit(backend)
        .context(alerts::UPDATE_FILE)?;
    output_report(config, Report::File(&updated), target)?;
    Ok(exit_codes::SUCCESS)
}

/// Delete a file after confirmation.
pub fn run_file_delete(
    backend: &dyn MemoriesBackend,
    config: &AppConfig,
    id: i64,
    confirm: &mut dyn Confirm,
    target: &OutputTarget,
) -> Result<i32> {
    require_admin(config, "Deleting a file")?;

    let mut view = FeedView::new(config.session());
    let outcome = view
        .delete_file(backend, id, confirm)
        .context(alerts::DELETE_FILE)?;

    output_report(
        config,
        Report::Deleted {
            kind: ItemKind::File,
            id,
            outcome,
        },
        target,
    )?;
    Ok(exit_codes::SUCCESS)
}
