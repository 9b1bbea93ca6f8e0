//! Dashboard command handler.

use crate::client::MemoriesBackend;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, output_report, OutputTarget, Report};
use crate::views::{alerts, DashboardView};
use anyhow::{Context, Result};

/// Fetch the four collections and print counts plus recent vignettes.
///
/// Any failed request fails the whole command.
pub fn run_dashboard(
    backend: &dyn MemoriesBackend,
    config: &AppConfig,
    target: &OutputTarget,
) -> Result<i32> {
    let mut view = DashboardView::new(&config.dashboard);
    view.refresh(backend).context(alerts::LOAD_DASHBOARD)?;
    let snapshot = view
        .snapshot()
        .context("Dashboard has no data after refresh")?;

    output_report(config, Report::Dashboard(snapshot), target)?;
    Ok(exit_codes::SUCCESS)
}
