//! Uploaded files: binary artifacts with optional title, description and MIME type.

use super::dates::parse_timestamp;
use crate::error::{MemoriesError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fallback name when a file has neither title nor filename.
const DEFAULT_DOWNLOAD_NAME: &str = "download";

/// Stored filenames longer than this containing a `-` are server-generated
/// (uuid-style) and carry no useful extension.
const GENERATED_NAME_MIN_LEN: usize = 30;

/// Placeholder shown when a file has no MIME type.
pub const UNKNOWN_TYPE: &str = "Unknown type";

/// A file as returned by `GET /api/files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

impl FileRecord {
    /// Parsed creation time, `None` when missing or malformed.
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// Title if set, otherwise the stored filename.
    #[must_use]
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(&self.filename)
    }

    /// MIME type for display, falling back to [`UNKNOWN_TYPE`].
    #[must_use]
    pub fn type_label(&self) -> &str {
        non_empty(self.file_type.as_deref()).unwrap_or(UNKNOWN_TYPE)
    }

    #[must_use]
    pub fn category(&self) -> FileCategory {
        FileCategory::from_mime(self.file_type.as_deref())
    }

    /// Whether the file can be previewed without downloading.
    #[must_use]
    pub fn can_view_inline(&self) -> bool {
        can_view_inline(self.file_type.as_deref())
    }

    /// Name to save a downloaded copy under.
    ///
    /// Uses the title, then the stored filename, then `download`. When the
    /// stored filename is server-generated, the MIME subtype is appended as
    /// an extension if the chosen name has none.
    #[must_use]
    pub fn download_filename(&self) -> String {
        let mut name = non_empty(self.title.as_deref())
            .or_else(|| non_empty(Some(self.filename.as_str())))
            .unwrap_or(DEFAULT_DOWNLOAD_NAME)
            .to_string();

        let generated =
            self.filename.contains('-') && self.filename.chars().count() > GENERATED_NAME_MIN_LEN;
        if generated {
            let extension = non_empty(self.file_type.as_deref())
                .and_then(|mime| mime.split('/').nth(1))
                .unwrap_or("");
            if !extension.is_empty() && !name.contains('.') {
                name = format!("{name}.{extension}");
            }
        }
        name
    }
}

/// Inline preview is offered for images, PDFs and text.
#[must_use]
pub fn can_view_inline(file_type: Option<&str>) -> bool {
    file_type.is_some_and(|t| t.contains("image") || t.contains("pdf") || t.contains("text"))
}

/// Coarse file category derived from the MIME string, used for card icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Pdf,
    Document,
    Spreadsheet,
    Image,
    Video,
    Other,
}

impl FileCategory {
    /// Classify a MIME string. Checks run in order, so
    /// `application/pdf` is a PDF even though it is also a "document".
    #[must_use]
    pub fn from_mime(file_type: Option<&str>) -> Self {
        let Some(t) = file_type else {
            return Self::Other;
        };
        if t.contains("pdf") {
            Self::Pdf
        } else if t.contains("word") || t.contains("document") {
            Self::Document
        } else if t.contains("excel") || t.contains("spreadsheet") {
            Self::Spreadsheet
        } else if t.contains("image") {
            Self::Image
        } else if t.contains("video") {
            Self::Video
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Pdf => "📕",
            Self::Document => "📘",
            Self::Spreadsheet => "📗",
            Self::Image => "🖼️",
            Self::Video => "🎥",
            Self::Other => "📄",
        }
    }
}

/// The inline edit form for a file's title and description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEdit {
    pub title: String,
    pub description: String,
}

impl FileEdit {
    /// Prefill the form from a file; absent fields become empty strings.
    #[must_use]
    pub fn from_file(file: &FileRecord) -> Self {
        Self {
            title: file.title.clone().unwrap_or_default(),
            description: file.description.clone().unwrap_or_default(),
        }
    }
}

// ============================================================================
// Uploads
// ============================================================================

/// A local file staged for `POST /api/files`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// Original file name; also sent as the title
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Read a local file into an upload.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                MemoriesError::validation(format!("{} has no usable file name", path.display()))
            })?;
        let bytes = std::fs::read(path).map_err(|e| MemoriesError::io(path, e))?;
        Ok(Self {
            mime_type: guess_mime(&file_name).to_string(),
            file_name,
            bytes,
        })
    }
}

/// Best-effort MIME type from a file extension.
#[must_use]
pub fn guess_mime(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "json" => "application/json",
        "rtf" => "application/rtf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" | "aac" => "audio/mp4",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        _ => "application/octet-stream",
    }
}
