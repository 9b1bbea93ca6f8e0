//! Report type definitions.

use crate::config::DEFAULT_PREVIEW_WIDTH;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable cards for the terminal
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Maximum columns of content shown per card
    pub preview_width: usize,
    /// Omit headers and hints
    pub quiet: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview_width: DEFAULT_PREVIEW_WIDTH,
            quiet: false,
        }
    }
}
