//! Vignette command handlers.

use super::require_admin;
use crate::client::MemoriesBackend;
use crate::config::AppConfig;
use crate::model::{ItemKind, Vignette, VignetteDraft};
use crate::pipeline::{exit_codes, output_report, OutputTarget, Report};
use crate::views::{alerts, Confirm, FeedView, VignetteEditor};
use anyhow::{Context, Result};

fn fetch_vignette(view: &mut FeedView, backend: &dyn MemoriesBackend, id: i64) -> Result<Vignette> {
    view.refresh_vignettes(backend)
        .context("Failed to fetch vignettes")?;
    view.find_vignette(id)
        .cloned()
        .with_context(|| format!("Vignette {id} not found"))
}

/// Print a single vignette in full.
pub fn run_vignette_view(
    backend: &dyn MemoriesBackend,
    config: &AppConfig,
    id: i64,
    target: &OutputTarget,
) -> Result<i32> {
    let mut view = FeedView::new(config.session());
    let vignette = fetch_vignette(&mut view, backend, id)?;
    output_report(config, Report::Vignette(&vignette), target)?;
    Ok(exit_codes::SUCCESS)
}

/// Create a vignette.
pub fn run_vignette_create(
    backend: &dyn MemoriesBackend,
    config: &AppConfig,
    draft: VignetteDraft,
    target: &OutputTarget,
) -> Result<i32> {
    let mut view = FeedView::new(config.session());
    let editor = VignetteEditor::create(draft);
    let saved = view
        .save_vignette(backend, &editor)
        .context(alerts::SAVE_VIGNETTE)?;
    output_report(config, Report::Vignette(&saved), target)?;
    Ok(exit_codes::SUCCESS)
}

/// Change the title and/or content of an existing vignette. Fields left
/// as `None` keep their current value.
pub fn run_vignette_update(
    backend: &dyn MemoriesBackend,
    config: &AppConfig,
    id: i64,
    title: Option<String>,
    content: Option<String>,
    target: &OutputTarget,
) -> Result<i32> {
    require_admin(config, "Editing a vignette")?;
    if title.is_none() && content.is_none() {
        anyhow::bail!("Nothing to change: pass --title and/or --content");
    }

    let mut view = FeedView::new(config.session());
    let existing = fetch_vignette(&mut view, backend, id)?;

    let mut editor = VignetteEditor::edit(&existing);
    if let Some(title) = title {
        editor.draft_mut().title = title;
    }
    if let Some(content) = content {
        editor.draft_mut().content = Some(content);
    }

    let saved = view
        .save_vignette(backend, &editor)
        .context(alerts::SAVE_VIGNETTE)?;
    output_report(config, Report::Vignette(&saved), target)?;
    Ok(exit_codes::SUCCESS)
}

/// Delete a vignette after confirmation.
pub fn run_vignette_delete(
    backend: &dyn MemoriesBackend,
    config: &AppConfig,
    id: i64,
    confirm: &mut dyn Confirm,
    target: &OutputTarget,
) -> Result<i32> {
    require_admin(config, "Deleting a vignette")?;

    let mut view = FeedView::new(config.session());
    let outcome = view
        .delete_vignette(backend, id, confirm)
        .context(alerts::DELETE_VIGNETTE)?;

    output_report(
        config,
        Report::Deleted {
            kind: ItemKind::Vignette,
            id,
            outcome,
        },
        target,
    )?;
    Ok(exit_codes::SUCCESS)
}
