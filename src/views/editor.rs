//! Create/edit form for a single vignette.

use crate::client::MemoriesBackend;
use crate::error::{MemoriesError, Result};
use crate::model::{Vignette, VignetteDraft};

/// A vignette form bound either to a new vignette or to an existing id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VignetteEditor {
    target: Option<i64>,
    draft: VignetteDraft,
}

impl VignetteEditor {
    /// An empty form that will `POST` a new vignette.
    #[must_use]
    pub fn create(draft: VignetteDraft) -> Self {
        Self {
            target: None,
            draft,
        }
    }

    /// A form prefilled from `vignette` that will `PUT` to its id.
    #[must_use]
    pub fn edit(vignette: &Vignette) -> Self {
        Self {
            target: Some(vignette.id),
            draft: VignetteDraft::from_vignette(vignette),
        }
    }

    /// Id being edited, `None` when creating.
    #[must_use]
    pub const fn target(&self) -> Option<i64> {
        self.target
    }

    #[must_use]
    pub const fn draft(&self) -> &VignetteDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut VignetteDraft {
        &mut self.draft
    }

    /// A vignette needs a non-blank title.
    pub fn validate(&self) -> Result<()> {
        if self.draft.title.trim().is_empty() {
            return Err(MemoriesError::validation("Vignette title must not be empty"));
        }
        Ok(())
    }

    /// Validate and send the form.
    pub fn submit(&self, backend: &dyn MemoriesBackend) -> Result<Vignette> {
        self.validate()?;
        match self.target {
            None => backend.create_vignette(&self.draft),
            Some(id) => backend.update_vignette(id, &self.draft),
        }
    }
}
