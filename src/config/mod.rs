//! Configuration module for family-memories.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.family-memories.yaml` file in the working directory or
//! `~/.config/family-memories/`:
//!
//! ```yaml
//! api:
//!   base_url: https://memories.example
//! session:
//!   is_admin: true
//! feed:
//!   default_sort: title-asc
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    API_URL_ENV, DEFAULT_API_URL, DEFAULT_PHOTO_LIMIT, DEFAULT_PREVIEW_WIDTH, DEFAULT_RECENT_LIMIT,
    DEFAULT_TIMEOUT_SECS, TOKEN_ENV,
};
pub use types::{
    ApiConfig, AppConfig, AppConfigBuilder, BehaviorConfig, DashboardConfig, DownloadConfig,
    FeedConfig, OutputConfig, SessionConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, search_dirs, flag, ConfigFileError, ConfigOverrides,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it for validation and autocompletion of
/// `.family-memories.yaml`.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
