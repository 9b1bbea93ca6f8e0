//! Data model for the memories archive.
//!
//! [`Vignette`] and [`FileRecord`] mirror the backend's JSON; [`FeedItem`]
//! is the derived shape used to show both in a single feed.

mod dates;
mod feed;
mod file;
mod session;
mod vignette;

pub use dates::{display_date, parse_timestamp};
pub use feed::{build_feed, FeedItem, FeedSource, ItemKind, SortMode};
pub use file::{can_view_inline, guess_mime, FileCategory, FileEdit, FileRecord, FileUpload, UNKNOWN_TYPE};
pub use session::Session;
pub use vignette::{Vignette, VignetteDraft, NO_CONTENT};
