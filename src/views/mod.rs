//! Views: fetched state plus the session, and the operations on it.
//!
//! Views hold no cache beyond the last fetch and never patch state
//! locally; every successful mutation refetches the affected list.

mod confirm;
mod dashboard;
mod editor;
mod feed;
mod preview;
mod upload;

pub use confirm::{prompt_stdin, Confirm, DELETE_FILE_PROMPT, DELETE_VIGNETTE_PROMPT};
pub use dashboard::{
    fetch_snapshot, DashboardSnapshot, DashboardState, DashboardStats, DashboardView,
};
pub use editor::VignetteEditor;
pub use feed::{actions_for, DeleteOutcome, FeedView, FileEditState, ItemAction};
pub use preview::{Preview, PreviewSlot};
pub use upload::{UploadEntry, UploadOutcome, UploadReport};

/// User-facing failure messages for write operations.
pub mod alerts {
    use crate::error::MemoriesError;

    pub const DELETE_VIGNETTE: &str = "Failed to delete vignette";
    pub const DELETE_FILE: &str = "Failed to delete file. Please try again.";
    pub const UPDATE_FILE: &str = "Failed to update file. Please try again.";
    pub const SAVE_VIGNETTE: &str = "Failed to save vignette";
    pub const LOAD_DASHBOARD: &str = "Failed to load dashboard";

    #[must_use]
    pub fn upload_failed(name: &str) -> String {
        format!("Failed to upload {name}. Please try again.")
    }

    #[must_use]
    pub fn download_failed(err: &MemoriesError) -> String {
        format!("Failed to download file: {}", err.user_message())
    }

    #[must_use]
    pub fn view_failed(err: &MemoriesError) -> String {
        format!("Failed to open file: {}", err.user_message())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_messages_use_backend_detail() {
            let err = MemoriesError::api("fetching file 3", 404, Some("File not found".into()));
            assert_eq!(download_failed(&err), "Failed to download file: File not found");
            assert_eq!(
                view_failed(&MemoriesError::api("x", 500, None)),
                "Failed to open file: Request failed with status code 500"
            );
            assert_eq!(
                upload_failed("beach.jpg"),
                "Failed to upload beach.jpg. Please try again."
            );
        }
    }
}
