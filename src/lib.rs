//! **A client library for a family memories archive.**
//!
//! `family-memories` talks to a memories backend that stores two kinds of
//! entries: *vignettes* (short written stories) and *files* (scans, photos,
//! documents). It merges both into a single sortable feed, summarises the
//! collection on a dashboard, and drives uploads, downloads, previews and
//! confirmation-gated deletes.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: Backend records ([`Vignette`], [`FileRecord`]) and the
//!   merged [`FeedItem`] with its [`SortMode`] ordering.
//! - **[`client`]**: The [`MemoriesBackend`] trait and its HTTP
//!   implementation, plus [`BlobHandle`] for temporary preview payloads.
//! - **[`views`]**: [`FeedView`] and [`DashboardView`], holding fetched
//!   state plus the session and exposing the operations on it.
//! - **[`reports`]**: Text and JSON renderers for views.
//! - **[`config`]**: YAML configuration with discovery, validation and a
//!   JSON Schema.
//!
//! ## Building a Feed
//!
//! ```no_run
//! use family_memories::{build_feed, FileRecord, SortMode, Vignette};
//!
//! let vignettes: Vec<Vignette> = Vec::new();
//! let files: Vec<FileRecord> = Vec::new();
//!
//! for item in build_feed(&vignettes, &files, SortMode::TitleAsc) {
//!     println!("{} {}", item.item_type.label(), item.display_title);
//! }
//! ```
//!
//! ## Talking to a Backend
//!
//! ```no_run
//! use family_memories::{FeedView, HttpBackend, HttpBackendConfig, Session, SortMode};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = HttpBackend::new(HttpBackendConfig::default())?;
//!     let mut view = FeedView::new(Session::guest());
//!     for failure in view.load(&backend) {
//!         eprintln!("{}", failure.user_message());
//!     }
//!     println!("{} items", view.items(SortMode::DateDesc).len());
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod utils;
pub mod views;

// Re-export main types for convenience
pub use client::{BlobHandle, HttpBackend, HttpBackendConfig, MemoriesBackend};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use error::{ErrorContext, MemoriesError, Result};
pub use model::{
    build_feed, FeedItem, FeedSource, FileEdit, FileRecord, FileUpload, ItemKind, Session,
    SortMode, Vignette, VignetteDraft,
};
pub use reports::{OutputFormat, ReportGenerator};
pub use views::{
    Confirm, DashboardSnapshot, DashboardState, DashboardView, DeleteOutcome, FeedView,
    ItemAction, UploadReport, VignetteEditor,
};
