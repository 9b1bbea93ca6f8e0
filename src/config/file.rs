//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::model::SortMode;
use crate::reports::OutputFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".family-memories.yaml",
    ".family-memories.yml",
    "family-memories.yaml",
    "family-memories.yml",
];

/// Directory name used under the user config directory.
const CONFIG_DIR_NAME: &str = "family-memories";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/family-memories/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Directories searched for a config file, in priority order.
#[must_use]
pub fn search_dirs() -> Vec<PathBuf> {
    let mut dirs_out = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs_out.push(cwd);
    }
    if let Some(config_dir) = dirs::config_dir() {
        dirs_out.push(config_dir.join(CONFIG_DIR_NAME));
    }
    if let Some(home) = dirs::home_dir() {
        dirs_out.push(home);
    }
    dirs_out
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Command-line Overrides
// ============================================================================

/// Values given on the command line, layered over the config file.
///
/// Every field is optional: `None` leaves the file (or default) value alone,
/// `Some` always wins, even when it equals the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub admin: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub no_color: Option<bool>,
    pub quiet: Option<bool>,
    pub assume_yes: Option<bool>,
    pub default_sort: Option<SortMode>,
    pub download_dir: Option<PathBuf>,
}

/// `Some(true)` for a set switch, `None` otherwise. Switches can only turn
/// a setting on.
#[must_use]
pub fn flag(set: bool) -> Option<bool> {
    set.then_some(true)
}

impl AppConfig {
    /// Apply command-line overrides on top of this config.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = &overrides.api_url {
            self.api.base_url.clone_from(url);
        }
        if let Some(token) = &overrides.token {
            self.api.token = Some(token.clone());
        }
        if let Some(admin) = overrides.admin {
            self.session.is_admin = admin;
        }
        if let Some(format) = overrides.output_format {
            self.output.format = format;
        }
        if let Some(no_color) = overrides.no_color {
            self.output.no_color = no_color;
        }
        if let Some(quiet) = overrides.quiet {
            self.behavior.quiet = quiet;
        }
        if let Some(yes) = overrides.assume_yes {
            self.behavior.assume_yes = yes;
        }
        if let Some(sort) = overrides.default_sort {
            self.feed.default_sort = sort;
        }
        if let Some(dir) = &overrides.download_dir {
            self.download.dir = Some(dir.clone());
        }
    }

    /// Load from file and apply CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# Family Memories Configuration
# Place this file at .family-memories.yaml or ~/.config/family-memories/family-memories.yaml

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# Family Memories Configuration File
# ===================================
#
# Place it at:
#   - .family-memories.yaml in the current directory
#   - ~/.config/family-memories/family-memories.yaml for global config
#
# CLI arguments always override file settings.

# Backend connection
api:
  base_url: http://localhost:8000
  timeout_secs: 30
  # Bearer token from the session provider (or FAMILY_MEMORIES_TOKEN)
  # token: ...

# Signed-in user
session:
  # username: grandma
  # Offer edit/delete actions
  is_admin: false

# Output configuration
output:
  # Format: text, json
  format: text
  no_color: false

# Behavior flags
behavior:
  quiet: false
  # Skip confirmation prompts before deleting
  assume_yes: false

# Combined feed
feed:
  # date-desc, date-asc, title-asc, title-desc, type
  default_sort: date-desc
  preview_width: 120

# Dashboard
dashboard:
  recent_limit: 5
  photo_limit: 1000

# Downloads (saved to the current directory unless dir is set)
download: {}
#  dir: /home/tom/Downloads
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
