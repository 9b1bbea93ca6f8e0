//! Configuration validation for family-memories.

use super::types::{ApiConfig, AppConfig, DashboardConfig, DownloadConfig, FeedConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.api.validate());
        errors.extend(self.feed.validate());
        errors.extend(self.dashboard.validate());
        errors.extend(self.download.validate());
        errors
    }
}

impl Validatable for ApiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let url = self.base_url.trim();
        if url.is_empty() {
            errors.push(ConfigError::new("api.base_url", "Backend URL must not be empty"));
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(ConfigError::new(
                "api.base_url",
                format!("Backend URL must start with http:// or https://, got '{url}'"),
            ));
        }

        if self.timeout_secs == 0 {
            errors.push(ConfigError::new(
                "api.timeout_secs",
                "Timeout must be at least 1 second",
            ));
        }

        if self.token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            errors.push(ConfigError::new("api.token", "Token must not be blank"));
        }

        errors
    }
}

impl Validatable for FeedConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.preview_width < 10 {
            errors.push(ConfigError::new(
                "feed.preview_width",
                format!("Preview width must be at least 10 columns, got {}", self.preview_width),
            ));
        }
        errors
    }
}

impl Validatable for DashboardConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.recent_limit == 0 {
            errors.push(ConfigError::new(
                "dashboard.recent_limit",
                "Recent vignette limit must be at least 1",
            ));
        }
        if self.photo_limit == 0 {
            errors.push(ConfigError::new(
                "dashboard.photo_limit",
                "Photo limit must be at least 1",
            ));
        }
        errors
    }
}

impl Validatable for DownloadConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref dir) = self.dir {
            if !dir.as_os_str().is_empty() && !dir.is_dir() {
                errors.push(ConfigError::new(
                    "download.dir",
                    format!("Download directory does not exist: {}", dir.display()),
                ));
            }
        }
        errors
    }
}
