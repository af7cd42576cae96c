//! Resolved identities for one render cycle.

use serde::{Deserialize, Serialize};

/// Who a password resolved to.
///
/// Identities are never persisted; they exist only between authentication and
/// rendering. The master identity is granted by the configured master
/// password and is not tied to any row of the users sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum Identity {
    /// Master login; sees the entire ledger.
    Master,
    /// A registered buyer, identified by sheet display name.
    Buyer(String),
}

impl Identity {
    /// Whether this is the master identity.
    #[must_use]
    pub const fn is_master(&self) -> bool {
        matches!(self, Self::Master)
    }

    /// Display name for welcome banners.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Master => "Master User",
            Self::Buyer(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_master() {
        assert!(Identity::Master.is_master());
        assert!(!Identity::Buyer("Alice".into()).is_master());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Identity::Master.display_name(), "Master User");
        assert_eq!(Identity::Buyer("Alice".into()).display_name(), "Alice");
    }
}
