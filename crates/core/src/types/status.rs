//! Payment state derived from the sheet's free-form status column.

use serde::{Deserialize, Serialize};

/// Whether a purchase has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Paid,
    #[default]
    Pending,
}

impl PaymentState {
    /// Classify a status cell.
    ///
    /// The sheet's status column is free text ("Paid", "paid via GPay",
    /// "Pending"), so any label containing "paid" case-insensitively counts
    /// as settled. A missing or empty label is pending.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.to_ascii_lowercase().contains("paid") {
            Self::Paid
        } else {
            Self::Pending
        }
    }

    /// Whether this state is [`PaymentState::Paid`].
    #[must_use]
    pub const fn is_paid(self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl std::fmt::Display for PaymentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(PaymentState::from_label("Paid"), PaymentState::Paid);
        assert_eq!(PaymentState::from_label("PAID"), PaymentState::Paid);
        assert_eq!(
            PaymentState::from_label("paid via GPay"),
            PaymentState::Paid
        );
    }

    #[test]
    fn test_from_label_pending() {
        assert_eq!(PaymentState::from_label("Pending"), PaymentState::Pending);
        assert_eq!(PaymentState::from_label(""), PaymentState::Pending);
        assert_eq!(PaymentState::from_label("due"), PaymentState::Pending);
    }

    #[test]
    fn test_substring_rule_applies_anywhere_in_label() {
        // Free-text matching is deliberate; "Prepaid" settles too.
        assert_eq!(PaymentState::from_label("Prepaid"), PaymentState::Paid);
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(PaymentState::default(), PaymentState::Pending);
    }
}
