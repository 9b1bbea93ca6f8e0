//! Feed command handler.

use crate::client::MemoriesBackend;
use crate::config::AppConfig;
use crate::model::SortMode;
use crate::pipeline::{exit_codes, output_report, OutputTarget, Report};
use crate::views::FeedView;
use anyhow::{Context, Result};

/// Print the merged vignette/file feed.
///
/// When only one of the two lists could be fetched the other is shown
/// empty; when both fail the command fails.
pub fn run_feed(
    backend: &dyn MemoriesBackend,
    config: &AppConfig,
    sort: Option<SortMode>,
    target: &OutputTarget,
) -> Result<i32> {
    let mut view = FeedView::new(config.session());
    let mut failures = view.load(backend);
    if failures.len() == 2 {
        let first = failures.swap_remove(0);
        return Err(first).context("Failed to load vignettes and files");
    }

    let sort = sort.unwrap_or(config.feed.default_sort);
    let items = view.items(sort);
    tracing::debug!("Rendering {} feed items sorted {}", items.len(), sort);

    output_report(
        config,
        Report::Feed {
            items: &items,
            session: view.session(),
            sort,
        },
        target,
    )?;
    Ok(exit_codes::SUCCESS)
}
