//! The combined feed: vignettes and files projected into one sortable shape.
//!
//! Feed items borrow from the fetched lists and are rebuilt on every call to
//! [`build_feed`]; nothing here is cached or persisted.

use super::file::FileRecord;
use super::vignette::Vignette;
use crate::utils::locale_compare;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which source list a feed item came from.
///
/// The declaration order is the `type` sort order: vignettes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Vignette,
    File,
}

impl ItemKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vignette => "Vignette",
            Self::File => "File",
        }
    }
}

/// The entity behind a feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FeedSource<'a> {
    Vignette(&'a Vignette),
    File(&'a FileRecord),
}

/// A vignette or file in the common display shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem<'a> {
    pub item_type: ItemKind,
    /// Title, or the filename for untitled files
    pub display_title: String,
    /// Parsed `created_at`; `None` sorts as the oldest date
    pub display_date: Option<DateTime<Utc>>,
    /// Lowercased display title, empty when absent
    pub sort_key: String,
    #[serde(flatten)]
    pub source: FeedSource<'a>,
}

impl<'a> FeedItem<'a> {
    #[must_use]
    pub fn from_vignette(vignette: &'a Vignette) -> Self {
        Self {
            item_type: ItemKind::Vignette,
            display_title: vignette.title.clone(),
            display_date: vignette.created(),
            sort_key: vignette.title.to_lowercase(),
            source: FeedSource::Vignette(vignette),
        }
    }

    #[must_use]
    pub fn from_file(file: &'a FileRecord) -> Self {
        let title = file.display_title();
        Self {
            item_type: ItemKind::File,
            display_title: title.to_string(),
            display_date: file.created(),
            sort_key: title.to_lowercase(),
            source: FeedSource::File(file),
        }
    }

    /// Backend id of the underlying entity.
    #[must_use]
    pub fn id(&self) -> i64 {
        match self.source {
            FeedSource::Vignette(v) => v.id,
            FeedSource::File(f) => f.id,
        }
    }

    /// `(kind, id)` pair identifying the item across both lists.
    #[must_use]
    pub fn key(&self) -> (ItemKind, i64) {
        (self.item_type, self.id())
    }
}

/// Feed ordering selected by the user.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Newest first
    #[default]
    DateDesc,
    /// Oldest first
    DateAsc,
    /// Title A-Z
    TitleAsc,
    /// Title Z-A
    TitleDesc,
    /// Vignettes first, then files, newest first within each
    Type,
}

impl SortMode {
    pub const ALL: [Self; 5] = [
        Self::DateDesc,
        Self::DateAsc,
        Self::TitleAsc,
        Self::TitleDesc,
        Self::Type,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateDesc => "date-desc",
            Self::DateAsc => "date-asc",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::Type => "type",
        }
    }

    /// Human-readable label for the sort control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DateDesc => "Date (Newest First)",
            Self::DateAsc => "Date (Oldest First)",
            Self::TitleAsc => "Title (A-Z)",
            Self::TitleDesc => "Title (Z-A)",
            Self::Type => "Type (Vignettes First)",
        }
    }

    /// Comparator for this mode.
    #[must_use]
    pub fn compare(self, a: &FeedItem<'_>, b: &FeedItem<'_>) -> Ordering {
        match self {
            Self::DateDesc => b.display_date.cmp(&a.display_date),
            Self::DateAsc => a.display_date.cmp(&b.display_date),
            Self::TitleAsc => locale_compare(&a.sort_key, &b.sort_key),
            Self::TitleDesc => locale_compare(&b.sort_key, &a.sort_key),
            Self::Type => a
                .item_type
                .cmp(&b.item_type)
                .then_with(|| b.display_date.cmp(&a.display_date)),
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merge vignettes and files into one feed ordered by `mode`.
///
/// Every input appears exactly once in the output.
#[must_use]
pub fn build_feed<'a>(
    vignettes: &'a [Vignette],
    files: &'a [FileRecord],
    mode: SortMode,
) -> Vec<FeedItem<'a>> {
    let mut items: Vec<FeedItem<'a>> = vignettes
        .iter()
        .map(FeedItem::from_vignette)
        .chain(files.iter().map(FeedItem::from_file))
        .collect();
    items.sort_by(|a, b| mode.compare(a, b));
    items
}
