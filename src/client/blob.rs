//! Scoped ownership of transiently fetched file payloads.
//!
//! A [`BlobHandle`] keeps a payload in a temporary file for as long as a
//! preview needs it. The file is removed by [`BlobHandle::release`] or, on
//! any other path, when the handle is dropped.

use crate::error::{ErrorContext, MemoriesError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const TEMP_PREFIX: &str = "family-memories-";

/// A temporary on-disk copy of a fetched payload.
#[derive(Debug)]
pub struct BlobHandle {
    file: NamedTempFile,
    len: usize,
    mime_type: String,
}

impl BlobHandle {
    /// Write `bytes` to a fresh temporary file.
    ///
    /// The extension of `name_hint` is kept so external viewers can pick
    /// the right program.
    pub fn acquire(bytes: &[u8], name_hint: &str, mime_type: &str) -> Result<Self> {
        let suffix = Path::new(name_hint)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        let mut file = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(&suffix)
            .tempfile()
            .context("creating preview blob")?;
        file.write_all(bytes)
            .and_then(|()| file.flush())
            .map_err(|e| MemoriesError::io(file.path(), e))?;

        tracing::debug!("Acquired blob {} ({} bytes)", file.path().display(), bytes.len());
        Ok(Self {
            file,
            len: bytes.len(),
            mime_type: mime_type.to_string(),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Read the payload back as text, replacing invalid UTF-8.
    pub fn read_text(&self) -> Result<String> {
        let bytes = std::fs::read(self.path()).map_err(|e| MemoriesError::io(self.path(), e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Delete the temporary file now, reporting any failure.
    pub fn release(self) -> Result<()> {
        let path = self.file.path().to_path_buf();
        self.file
            .close()
            .map_err(|e| MemoriesError::io(&path, e))?;
        tracing::debug!("Released blob {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_keeps_extension_and_bytes() {
        let blob = BlobHandle::acquire(b"hello", "notes.txt", "text/plain").unwrap();
        assert!(blob.path().to_string_lossy().ends_with(".txt"));
        assert_eq!(blob.len(), 5);
        assert!(!blob.is_empty());
        assert_eq!(blob.mime_type(), "text/plain");
        assert_eq!(blob.read_text().unwrap(), "hello");
    }

    #[test]
    fn test_release_removes_file() {
        let blob = BlobHandle::acquire(b"data", "photo.jpg", "image/jpeg").unwrap();
        let path = blob.path().to_path_buf();
        assert!(path.exists());
        blob.release().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_file() {
        let path = {
            let blob = BlobHandle::acquire(b"data", "scan", "application/pdf").unwrap();
            blob.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
