//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler drives one view against a backend and returns an exit code.

mod dashboard;
mod feed;
mod file;
mod vignette;

pub use dashboard::run_dashboard;
pub use feed::run_feed;
pub use file::{
    run_file_delete, run_file_download, run_file_edit, run_file_upload, run_file_view,
};
pub use vignette::{run_vignette_create, run_vignette_delete, run_vignette_update, run_vignette_view};

use crate::config::AppConfig;
use crate::error::MemoriesError;
use crate::views::{prompt_stdin, Confirm};

/// Refuse edit and delete commands for sessions without the admin flag.
fn require_admin(config: &AppConfig, action: &str) -> anyhow::Result<()> {
    if config.session().can_manage() {
        Ok(())
    } else {
        Err(MemoriesError::not_authorized(action).into())
    }
}

/// Confirmation source for destructive commands: `--yes` answers for the
/// user, otherwise the terminal is asked.
#[must_use]
pub fn confirmer(config: &AppConfig) -> Box<dyn Confirm> {
    if config.behavior.assume_yes {
        Box::new(|_: &str| true)
    } else {
        Box::new(prompt_stdin)
    }
}
