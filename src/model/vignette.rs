//! Vignettes: user-authored text memories.

use super::dates::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown on cards for a vignette without content.
pub const NO_CONTENT: &str = "No content";

/// A vignette as returned by `GET /api/vignettes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vignette {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    /// Raw backend timestamp; parse with [`Vignette::created`]
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Vignette {
    /// Parsed creation time, `None` when missing or malformed.
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// Body text for a card, falling back to [`NO_CONTENT`].
    #[must_use]
    pub fn content_or_placeholder(&self) -> &str {
        match self.content.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => NO_CONTENT,
        }
    }
}

/// Fields submitted when creating or updating a vignette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VignetteDraft {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl VignetteDraft {
    pub fn new(title: impl Into<String>, content: Option<String>) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }

    /// Start a draft from an existing vignette (edit flow).
    #[must_use]
    pub fn from_vignette(vignette: &Vignette) -> Self {
        Self {
            title: vignette.title.clone(),
            content: vignette.content.clone(),
        }
    }
}
