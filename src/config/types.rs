//! Configuration types for family-memories.
//!
//! Provides structured configuration for the backend connection, the
//! session, and each view.

use super::defaults::{
    DEFAULT_API_URL, DEFAULT_PHOTO_LIMIT, DEFAULT_PREVIEW_WIDTH, DEFAULT_RECENT_LIMIT,
    DEFAULT_TIMEOUT_SECS,
};
use crate::client::HttpBackendConfig;
use crate::model::{Session, SortMode};
use crate::reports::OutputFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over the file with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Backend connection
    pub api: ApiConfig,
    /// Signed-in user supplied by the session provider
    pub session: SessionConfig,
    /// Output configuration (format, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Combined feed view
    pub feed: FeedConfig,
    /// Dashboard view
    pub dashboard: DashboardConfig,
    /// File downloads
    pub download: DownloadConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// The session to hand to views.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(self.session.username.clone(), self.session.is_admin)
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the backend origin.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api.base_url = url.into();
        self
    }

    /// Set the bearer token.
    pub fn token(mut self, token: Option<String>) -> Self {
        self.config.api.token = token;
        self
    }

    /// Set the request timeout.
    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.api.timeout_secs = secs;
        self
    }

    /// Set the session user.
    pub fn username(mut self, username: Option<String>) -> Self {
        self.config.session.username = username;
        self
    }

    /// Grant or withhold the admin flag.
    pub const fn admin(mut self, is_admin: bool) -> Self {
        self.config.session.is_admin = is_admin;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Skip confirmation prompts for destructive actions.
    pub const fn assume_yes(mut self, yes: bool) -> Self {
        self.config.behavior.assume_yes = yes;
        self
    }

    /// Set the default feed order.
    pub const fn default_sort(mut self, sort: SortMode) -> Self {
        self.config.feed.default_sort = sort;
        self
    }

    /// Set the download directory.
    pub fn download_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.config.download.dir = dir;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend origin, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Bearer token issued by the session provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token: None,
        }
    }
}

impl ApiConfig {
    /// Client settings for [`crate::client::HttpBackend`].
    #[must_use]
    pub fn to_backend_config(&self) -> HttpBackendConfig {
        HttpBackendConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            token: self.token.clone(),
        }
    }
}

/// The signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SessionConfig {
    /// Display name of the user
    pub username: Option<String>,
    /// Whether edit/delete actions are offered
    pub is_admin: bool,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: text or json
    pub format: OutputFormat,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Answer yes to confirmation prompts
    pub assume_yes: bool,
}

/// Combined feed settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FeedConfig {
    /// Order used when `--sort` is not given
    pub default_sort: SortMode,
    /// Maximum columns of vignette content shown per card
    pub preview_width: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_sort: SortMode::default(),
            preview_width: DEFAULT_PREVIEW_WIDTH,
        }
    }
}

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DashboardConfig {
    /// Number of recent vignettes listed
    pub recent_limit: usize,
    /// `limit` sent with the photo count request
    pub photo_limit: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            photo_limit: DEFAULT_PHOTO_LIMIT,
        }
    }
}

/// Download settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DownloadConfig {
    /// Directory downloads are saved to (current directory when unset)
    pub dir: Option<PathBuf>,
}

impl DownloadConfig {
    /// Effective download directory.
    #[must_use]
    pub fn target_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
