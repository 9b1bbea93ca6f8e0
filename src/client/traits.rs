//! The backend seam.
//!
//! Views talk to the memories backend only through [`MemoriesBackend`], so
//! the same view logic runs against the HTTP client or an in-memory stand-in.

use crate::error::Result;
use crate::model::{FileEdit, FileRecord, FileUpload, Vignette, VignetteDraft};

/// Operations exposed by the memories REST backend.
///
/// Implementations must be shareable across threads: the dashboard issues
/// its reads concurrently.
pub trait MemoriesBackend: Send + Sync {
    /// Short name for logs (e.g. "http").
    fn name(&self) -> &'static str;

    /// `GET /api/vignettes`
    fn list_vignettes(&self) -> Result<Vec<Vignette>>;

    /// `POST /api/vignettes`
    fn create_vignette(&self, draft: &VignetteDraft) -> Result<Vignette>;

    /// `PUT /api/vignettes/{id}`
    fn update_vignette(&self, id: i64, draft: &VignetteDraft) -> Result<Vignette>;

    /// `DELETE /api/vignettes/{id}`
    fn delete_vignette(&self, id: i64) -> Result<()>;

    /// `GET /api/files`
    fn list_files(&self) -> Result<Vec<FileRecord>>;

    /// `GET /api/files/{id}`, the raw payload.
    fn fetch_file(&self, id: i64) -> Result<Vec<u8>>;

    /// `POST /api/files` as multipart (`file` + `title`).
    fn upload_file(&self, upload: &FileUpload) -> Result<FileRecord>;

    /// `PUT /api/files/{id}` as multipart (`title` + `description`).
    fn update_file(&self, id: i64, edit: &FileEdit) -> Result<FileRecord>;

    /// `DELETE /api/files/{id}`
    fn delete_file(&self, id: i64) -> Result<()>;

    /// `GET /api/photos?limit=N`; only the length is used.
    fn list_photos(&self, limit: u32) -> Result<Vec<serde_json::Value>>;

    /// `GET /api/audio`; only the length is used.
    fn list_audio(&self) -> Result<Vec<serde_json::Value>>;
}
