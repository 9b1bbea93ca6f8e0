//! Per-file results of a batch upload.

use crate::model::FileRecord;
use serde::Serialize;
use std::path::PathBuf;

/// What happened to one selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum UploadOutcome {
    Uploaded { file: FileRecord },
    Failed { message: String },
}

/// One line of an [`UploadReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadEntry {
    pub path: PathBuf,
    /// File name as sent to the backend (or as much of it as could be read)
    pub name: String,
    #[serde(flatten)]
    pub outcome: UploadOutcome,
}

/// Outcomes in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UploadReport {
    pub entries: Vec<UploadEntry>,
}

impl UploadReport {
    pub(crate) fn push(&mut self, path: PathBuf, name: String, outcome: UploadOutcome) {
        self.entries.push(UploadEntry {
            path,
            name,
            outcome,
        });
    }

    #[must_use]
    pub fn uploaded(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, UploadOutcome::Uploaded { .. }))
            .count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.entries.len() - self.uploaded()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
