//! The single preview slot of the feed view.

use crate::client::BlobHandle;
use crate::model::FileRecord;

/// A file currently open for inline viewing.
#[derive(Debug)]
pub struct Preview {
    pub file: FileRecord,
    pub blob: BlobHandle,
}

/// Holds at most one [`Preview`]. Opening a new one or closing the slot
/// releases the previous blob.
#[derive(Debug, Default)]
pub struct PreviewSlot {
    current: Option<Preview>,
}

impl PreviewSlot {
    /// Replace the current preview, releasing the old one first.
    pub fn open(&mut self, preview: Preview) -> &Preview {
        self.close();
        self.current.insert(preview)
    }

    /// Release the current preview, if any.
    pub fn close(&mut self) {
        if let Some(preview) = self.current.take() {
            let id = preview.file.id;
            if let Err(e) = preview.blob.release() {
                tracing::warn!("Failed to release preview of file {}: {}", id, e);
            }
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Preview> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview(id: i64) -> Preview {
        Preview {
            file: FileRecord {
                id,
                title: None,
                filename: format!("{id}.txt"),
                description: None,
                file_type: Some("text/plain".into()),
                created_at: None,
            },
            blob: BlobHandle::acquire(b"text", "note.txt", "text/plain").unwrap(),
        }
    }

    #[test]
    fn test_open_replaces_and_releases_previous() {
        let mut slot = PreviewSlot::default();
        let first_path = slot.open(preview(1)).blob.path().to_path_buf();
        assert!(first_path.exists());

        let second_path = slot.open(preview(2)).blob.path().to_path_buf();
        assert!(!first_path.exists());
        assert!(second_path.exists());
        assert_eq!(slot.current().map(|p| p.file.id), Some(2));

        slot.close();
        assert!(!second_path.exists());
        assert!(!slot.is_open());
    }

    #[test]
    fn test_close_when_empty_is_noop() {
        let mut slot = PreviewSlot::default();
        slot.close();
        assert!(slot.current().is_none());
    }
}
