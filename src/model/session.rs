//! The signed-in user, as supplied by the external session provider.

use serde::{Deserialize, Serialize};

/// Session state passed explicitly into every view.
///
/// The admin flag only decides which affordances are offered; the backend
/// remains the authority on what a user may change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: Option<String>,
    pub is_admin: bool,
}

impl Session {
    #[must_use]
    pub fn new(username: Option<String>, is_admin: bool) -> Self {
        Self { username, is_admin }
    }

    /// An anonymous, non-admin session.
    #[must_use]
    pub fn guest() -> Self {
        Self::default()
    }

    /// Whether edit/delete affordances are offered.
    #[must_use]
    pub const fn can_manage(&self) -> bool {
        self.is_admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_cannot_manage() {
        assert!(!Session::guest().can_manage());
        assert!(Session::new(Some("tom".into()), true).can_manage());
    }
}
