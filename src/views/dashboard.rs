//! Dashboard: collection counts and the most recent vignettes.

use crate::client::MemoriesBackend;
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::model::Vignette;
use serde::Serialize;
use tracing::{debug, error};

/// Number of items in each collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub vignettes: usize,
    pub photos: usize,
    pub audio: usize,
    pub files: usize,
}

/// Everything the dashboard shows, applied as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    /// Leading vignettes in backend order
    pub recent_vignettes: Vec<Vignette>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DashboardState {
    #[default]
    Loading,
    Ready(DashboardSnapshot),
}

/// Fetch all four collections concurrently and join them.
///
/// Fails as a whole if any request fails.
pub fn fetch_snapshot(
    backend: &dyn MemoriesBackend,
    recent_limit: usize,
    photo_limit: u32,
) -> Result<DashboardSnapshot> {
    let ((vignettes, photos), (audio, files)) = rayon::join(
        || rayon::join(|| backend.list_vignettes(), || backend.list_photos(photo_limit)),
        || rayon::join(|| backend.list_audio(), || backend.list_files()),
    );
    let vignettes = vignettes?;
    let stats = DashboardStats {
        vignettes: vignettes.len(),
        photos: photos?.len(),
        audio: audio?.len(),
        files: files?.len(),
    };

    let recent_vignettes = vignettes.into_iter().take(recent_limit).collect();
    Ok(DashboardSnapshot {
        stats,
        recent_vignettes,
    })
}

/// Dashboard state; stays `Loading` until a refresh fully succeeds.
#[derive(Debug, Clone)]
pub struct DashboardView {
    state: DashboardState,
    recent_limit: usize,
    photo_limit: u32,
}

impl DashboardView {
    #[must_use]
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            state: DashboardState::Loading,
            recent_limit: config.recent_limit,
            photo_limit: config.photo_limit,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, DashboardState::Loading)
    }

    #[must_use]
    pub const fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match &self.state {
            DashboardState::Ready(snapshot) => Some(snapshot),
            DashboardState::Loading => None,
        }
    }

    /// Refetch everything. On failure the error is logged, the previous
    /// state is kept and the error is returned.
    pub fn refresh(&mut self, backend: &dyn MemoriesBackend) -> Result<()> {
        debug!("Refreshing dashboard from {} backend", backend.name());
        let snapshot =
            fetch_snapshot(backend, self.recent_limit, self.photo_limit).map_err(|e| {
                error!("Failed to fetch dashboard data: {}", e);
                e
            })?;
        debug!("Dashboard stats: {:?}", snapshot.stats);
        self.state = DashboardState::Ready(snapshot);
        Ok(())
    }
}
