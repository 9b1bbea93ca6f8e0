//! Shared orchestration for CLI command handlers.
//!
//! Connects to the backend, renders reports and writes them out, so each
//! handler only deals with its own view.

mod output;
mod report_stage;

pub use output::OutputTarget;
pub use report_stage::{output_report, report_config, Report};

use crate::client::HttpBackend;
use crate::config::AppConfig;
use anyhow::{Context, Result};

/// Exit codes for scripting
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Some files of an upload batch failed
    pub const PARTIAL_FAILURE: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Build the HTTP backend described by `config.api`.
pub fn connect_backend(config: &AppConfig) -> Result<HttpBackend> {
    let backend = HttpBackend::new(config.api.to_backend_config())
        .with_context(|| format!("Failed to create client for {}", config.api.base_url))?;
    tracing::debug!("Using backend at {}", backend.base_url());
    Ok(backend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::PARTIAL_FAILURE, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_connect_backend_uses_configured_url() {
        let config = AppConfig::builder().api_url("http://nas.local:8000").build();
        let backend = connect_backend(&config).unwrap();
        assert_eq!(backend.base_url(), "http://nas.local:8000");
    }
}
