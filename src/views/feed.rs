//! The combined vignette/file feed and its actions.

use super::alerts;
use super::confirm::{Confirm, DELETE_FILE_PROMPT, DELETE_VIGNETTE_PROMPT};
use super::preview::{Preview, PreviewSlot};
use super::upload::{UploadOutcome, UploadReport};
use super::VignetteEditor;
use crate::client::{BlobHandle, MemoriesBackend};
use crate::error::{ErrorContext, MemoriesError, Result};
use crate::model::{
    build_feed, FeedItem, FeedSource, FileEdit, FileRecord, FileUpload, Session, SortMode,
    Vignette,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

const FALLBACK_MIME: &str = "application/octet-stream";

/// An affordance offered on a feed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemAction {
    View,
    Download,
    Edit,
    Delete,
}

impl ItemAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Download => "Download",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
        }
    }
}

/// Actions for a card: vignettes can always be viewed, files only when
/// inline-viewable; files can always be downloaded; admins also get edit
/// and delete.
#[must_use]
pub fn actions_for(item: &FeedItem<'_>, session: &Session) -> Vec<ItemAction> {
    let mut actions = Vec::with_capacity(4);
    match item.source {
        FeedSource::Vignette(_) => actions.push(ItemAction::View),
        FeedSource::File(file) => {
            if file.can_view_inline() {
                actions.push(ItemAction::View);
            }
            actions.push(ItemAction::Download);
        }
    }
    if session.can_manage() {
        actions.push(ItemAction::Edit);
        actions.push(ItemAction::Delete);
    }
    actions
}

/// Result of a confirmation-gated delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined; nothing was sent
    Declined,
}

/// An inline file edit in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEditState {
    pub file_id: i64,
    pub form: FileEdit,
}

/// State of the feed: the two fetched lists plus transient UI state.
///
/// Every mutation is followed by a refetch of the affected list; nothing
/// is patched locally.
#[derive(Debug)]
pub struct FeedView {
    session: Session,
    vignettes: Vec<Vignette>,
    files: Vec<FileRecord>,
    loading: bool,
    editing: Option<FileEditState>,
    preview: PreviewSlot,
}

impl FeedView {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            vignettes: Vec::new(),
            files: Vec::new(),
            loading: true,
            editing: None,
            preview: PreviewSlot::default(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// True until the first vignette fetch settles.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn vignettes(&self) -> &[Vignette] {
        &self.vignettes
    }

    #[must_use]
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    #[must_use]
    pub fn find_vignette(&self, id: i64) -> Option<&Vignette> {
        self.vignettes.iter().find(|v| v.id == id)
    }

    #[must_use]
    pub fn find_file(&self, id: i64) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.id == id)
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Fetch both lists concurrently.
    ///
    /// Both reads finish inside `rayon::join`; their results are applied
    /// afterwards, each on its own. A failed read is logged and leaves that
    /// list as it was. The failures are returned for reporting.
    pub fn load(&mut self, backend: &dyn MemoriesBackend) -> Vec<MemoriesError> {
        debug!("Loading feed from {} backend", backend.name());
        let (vignettes, files) = rayon::join(|| backend.list_vignettes(), || backend.list_files());

        let mut failures = Vec::new();
        if let Err(e) = self.apply_vignettes(vignettes) {
            failures.push(e);
        }
        if let Err(e) = self.apply_files(files) {
            failures.push(e);
        }
        failures
    }

    /// Refetch the vignette list.
    pub fn refresh_vignettes(&mut self, backend: &dyn MemoriesBackend) -> Result<()> {
        self.apply_vignettes(backend.list_vignettes())
    }

    /// Refetch the file list.
    pub fn refresh_files(&mut self, backend: &dyn MemoriesBackend) -> Result<()> {
        self.apply_files(backend.list_files())
    }

    /// Refetch vignettes after a successful write. A failed refetch is not
    /// the write's failure, so the previous list is kept.
    fn resync_vignettes(&mut self, backend: &dyn MemoriesBackend) {
        if let Err(e) = self.refresh_vignettes(backend) {
            debug!("Keeping previous vignette list after refetch failure: {}", e);
        }
    }

    /// Refetch files after a successful write, keeping the previous list on
    /// failure.
    fn resync_files(&mut self, backend: &dyn MemoriesBackend) {
        if let Err(e) = self.refresh_files(backend) {
            debug!("Keeping previous file list after refetch failure: {}", e);
        }
    }

    fn apply_vignettes(&mut self, result: Result<Vec<Vignette>>) -> Result<()> {
        self.loading = false;
        match result {
            Ok(vignettes) => {
                debug!("Fetched {} vignettes", vignettes.len());
                self.vignettes = vignettes;
                Ok(())
            }
            Err(e) => {
                error!("Failed to fetch vignettes: {}", e);
                Err(e)
            }
        }
    }

    fn apply_files(&mut self, result: Result<Vec<FileRecord>>) -> Result<()> {
        match result {
            Ok(files) => {
                debug!("Fetched {} files", files.len());
                self.files = files;
                Ok(())
            }
            Err(e) => {
                error!("Failed to fetch files: {}", e);
                Err(e)
            }
        }
    }

    /// The merged feed in the given order, rebuilt from current state.
    #[must_use]
    pub fn items(&self, sort: SortMode) -> Vec<FeedItem<'_>> {
        build_feed(&self.vignettes, &self.files, sort)
    }

    /// Actions offered on `item` for this view's session.
    #[must_use]
    pub fn actions_for(&self, item: &FeedItem<'_>) -> Vec<ItemAction> {
        actions_for(item, &self.session)
    }

    // ------------------------------------------------------------------
    // Vignettes
    // ------------------------------------------------------------------

    /// Submit an editor form, then refetch vignettes.
    pub fn save_vignette(
        &mut self,
        backend: &dyn MemoriesBackend,
        editor: &VignetteEditor,
    ) -> Result<Vignette> {
        let saved = editor.submit(backend).map_err(|e| {
            error!("Failed to save vignette: {}", e);
            e
        })?;
        info!("Saved vignette {} ({})", saved.id, saved.title);
        self.resync_vignettes(backend);
        Ok(saved)
    }

    /// Delete a vignette after confirmation, then refetch vignettes.
    pub fn delete_vignette(
        &mut self,
        backend: &dyn MemoriesBackend,
        id: i64,
        confirm: &mut dyn Confirm,
    ) -> Result<DeleteOutcome> {
        if !confirm.confirm(DELETE_VIGNETTE_PROMPT) {
            debug!("Delete of vignette {} declined", id);
            return Ok(DeleteOutcome::Declined);
        }
        backend.delete_vignette(id).map_err(|e| {
            error!("{}: {}", alerts::DELETE_VIGNETTE, e);
            e
        })?;
        info!("Deleted vignette {}", id);
        self.resync_vignettes(backend);
        Ok(DeleteOutcome::Deleted)
    }

    // ------------------------------------------------------------------
    // Files
    // ------------------------------------------------------------------

    /// Delete a file after confirmation, then refetch files.
    pub fn delete_file(
        &mut self,
        backend: &dyn MemoriesBackend,
        id: i64,
        confirm: &mut dyn Confirm,
    ) -> Result<DeleteOutcome> {
        if !confirm.confirm(DELETE_FILE_PROMPT) {
            debug!("Delete of file {} declined", id);
            return Ok(DeleteOutcome::Declined);
        }
        backend.delete_file(id).map_err(|e| {
            error!("{}: {}", alerts::DELETE_FILE, e);
            e
        })?;
        info!("Deleted file {}", id);
        if self.preview.current().is_some_and(|p| p.file.id == id) {
            self.preview.close();
        }
        self.resync_files(backend);
        Ok(DeleteOutcome::Deleted)
    }

    /// Enter edit mode for `file`, prefilling the form.
    pub fn begin_file_edit(&mut self, file: &FileRecord) -> &mut FileEdit {
        let state = self.editing.insert(FileEditState {
            file_id: file.id,
            form: FileEdit::from_file(file),
        });
        &mut state.form
    }

    #[must_use]
    pub const fn file_edit(&self) -> Option<&FileEditState> {
        self.editing.as_ref()
    }

    pub fn file_edit_mut(&mut self) -> Option<&mut FileEdit> {
        self.editing.as_mut().map(|s| &mut s.form)
    }

    /// Send the edit form. On success edit mode ends and files are
    /// refetched; on failure edit mode is kept.
    pub fn save_file_edit(&mut self, backend: &dyn MemoriesBackend) -> Result<FileRecord> {
        let state = self
            .editing
            .as_ref()
            .ok_or_else(|| MemoriesError::validation("No file edit in progress"))?;
        let updated = backend
            .update_file(state.file_id, &state.form)
            .map_err(|e| {
                error!("{}: {}", alerts::UPDATE_FILE, e);
                e
            })?;
        info!("Updated file {}", updated.id);
        self.editing = None;
        self.resync_files(backend);
        Ok(updated)
    }

    /// Leave edit mode without sending anything.
    pub fn cancel_file_edit(&mut self) {
        self.editing = None;
    }

    /// Upload local files one at a time, in order.
    ///
    /// A failure is recorded for that file only and the loop continues.
    /// The file list is refetched once at the end.
    pub fn upload_files(&mut self, backend: &dyn MemoriesBackend, paths: &[PathBuf]) -> UploadReport {
        let mut report = UploadReport::default();

        for path in paths {
            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

            let result = FileUpload::from_path(path).and_then(|upload| {
                debug!("Uploading {} ({} bytes)", upload.file_name, upload.bytes.len());
                backend.upload_file(&upload)
            });

            let outcome = match result {
                Ok(file) => {
                    info!("Uploaded {} as file {}", name, file.id);
                    UploadOutcome::Uploaded { file }
                }
                Err(e) => {
                    error!("Failed to upload {}: {}", name, e);
                    UploadOutcome::Failed {
                        message: alerts::upload_failed(&name),
                    }
                }
            };
            report.push(path.clone(), name, outcome);
        }

        self.resync_files(backend);
        report
    }

    /// Fetch a file's bytes and save them.
    ///
    /// When `dest` is a directory the file is saved there under its
    /// download name, without overwriting an existing file. Otherwise
    /// `dest` is the target path.
    pub fn download(
        &self,
        backend: &dyn MemoriesBackend,
        file: &FileRecord,
        dest: &Path,
    ) -> Result<PathBuf> {
        let target = if dest.is_dir() {
            available_path(&dest.join(safe_file_name(&file.download_filename())))
        } else {
            dest.to_path_buf()
        };

        let bytes = backend
            .fetch_file(file.id)
            .with_context(|| format!("downloading file {}", file.id))
            .map_err(|e| {
                error!("Error downloading file {}: {}", file.id, e);
                e
            })?;
        std::fs::write(&target, &bytes).map_err(|e| MemoriesError::io(&target, e))?;
        info!("Saved file {} to {} ({} bytes)", file.id, target.display(), bytes.len());
        Ok(target)
    }

    /// Fetch a file into a fresh blob and show it, replacing any open
    /// preview.
    pub fn open_preview(
        &mut self,
        backend: &dyn MemoriesBackend,
        file: &FileRecord,
    ) -> Result<&Preview> {
        if !file.can_view_inline() {
            return Err(MemoriesError::validation(format!(
                "{} cannot be viewed inline",
                file.display_title()
            )));
        }

        let bytes = backend
            .fetch_file(file.id)
            .with_context(|| format!("previewing file {}", file.id))
            .map_err(|e| {
                error!("Error viewing file {}: {}", file.id, e);
                e
            })?;
        let mime = file.file_type.as_deref().unwrap_or(FALLBACK_MIME);
        let blob = BlobHandle::acquire(&bytes, &file.download_filename(), mime)?;
        drop(bytes);

        Ok(self.preview.open(Preview {
            file: file.clone(),
            blob,
        }))
    }

    #[must_use]
    pub const fn preview(&self) -> Option<&Preview> {
        self.preview.current()
    }

    /// Close the preview and release its blob.
    pub fn close_preview(&mut self) {
        self.preview.close();
    }
}

/// Strip path separators so a download name stays inside its directory.
fn safe_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') || c.is_control() { '_' } else { c })
        .collect();
    match cleaned.trim() {
        "" | "." | ".." => "download".to_string(),
        other => other.to_string(),
    }
}

/// `path`, or `stem (n).ext` for the first `n` that is free.
fn available_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    (1..)
        .map(|n| parent.join(format!("{stem} ({n}){ext}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}
